use intake::{Question, Section, Tally, TextQuestion};

use crate::{multi_or, text};

pub(crate) fn section() -> Section {
    Section::new(
        "restricciones",
        "SECCIÓN FINAL: ALERGIAS, INTOLERANCIAS Y PREFERENCIAS",
        vec![
            Question::new(
                "alergias_alimentarias",
                "¿Tienes alguna alergia alimentaria? (Marca todas las que apliquen)",
                multi_or(
                    &[
                        "Lácteos",
                        "Huevo",
                        "Frutos secos",
                        "Mariscos",
                        "Pescado",
                        "Gluten",
                        "Soya",
                        "Semillas",
                    ],
                    "Ninguna",
                ),
            )
            .with_heading("❗ Alergias alimentarias:"),
            text(
                "otra_alergia",
                "Otra alergia especificada:",
                "Otra alergia (especificar):",
                TextQuestion::line().inline(),
            ),
            Question::new(
                "intolerancias",
                "¿Tienes alguna intolerancia o malestar digestivo?",
                multi_or(
                    &[
                        "Lácteos con lactosa",
                        "Leguminosas",
                        "FODMAPs",
                        "Gluten",
                        "Crucíferas",
                        "Endulzantes artificiales",
                    ],
                    "Ninguna",
                ),
            )
            .with_heading("⚠️ Intolerancias o malestar digestivo:"),
            text(
                "otra_intolerancia",
                "Otra intolerancia especificada:",
                "Otra intolerancia (especificar):",
                TextQuestion::line().inline(),
            ),
            text(
                "alimentos_adicionales",
                "➕ Alimentos adicionales deseados:",
                "¿Hay algún alimento o bebida que desees incluir, aunque no aparezca en las listas anteriores?",
                TextQuestion::multiline(),
            ),
        ],
    )
    .with_tally(Tally::Restriction)
}
