use intake::{Question, Section, Tally};

use crate::{multi, multi_or};

pub(crate) fn sections() -> Vec<Section> {
    vec![cooking_fats(), drinks()]
}

fn cooking_fats() -> Section {
    Section::new(
        "aceites",
        "APARTADO EXTRA: GRASA/ACEITE DE COCCIÓN FAVORITA",
        vec![Question::new(
            "aceites_coccion",
            "Selecciona todos los aceites o grasas que uses para cocinar:",
            multi(&[
                "🫒 Aceite de oliva extra virgen",
                "🥑 Aceite de aguacate",
                "🥥 Aceite de coco virgen",
                "🧈 Mantequilla con sal",
                "🧈 Mantequilla sin sal",
                "🧈 Mantequilla clarificada (ghee)",
                "🐷 Manteca de cerdo (casera o artesanal)",
                "🧴 Spray antiadherente sin calorías (aceite de oliva o aguacate)",
                "❌ Prefiero cocinar sin aceite o con agua",
            ]),
        )],
    )
    .with_instructions(
        "(elige todas las opciones que suelas usar para cocinar, freír, hornear o saltear tus alimentos)",
    )
    .with_tally(Tally::CookingOil)
}

fn drinks() -> Section {
    Section::new(
        "bebidas",
        "BEBIDAS SIN CALORÍAS PARA HIDRATACIÓN",
        vec![Question::new(
            "bebidas_sin_calorias",
            "Selecciona todas las bebidas sin calorías que consumas:",
            multi_or(
                &[
                    "💧 Agua natural",
                    "💦 Agua mineral",
                    "⚡ Bebidas con electrolitos sin azúcar (Electrolit Zero, SueroX, LMNT, etc.)",
                    "🍋 Agua infusionada con frutas naturales (limón, pepino, menta, etc.)",
                    "🍵 Té de hierbas sin azúcar (manzanilla, menta, jengibre, etc.)",
                    "🍃 Té verde o té negro sin azúcar",
                    "☕ Café negro sin azúcar",
                    "🥤 Refrescos sin calorías (Coca Cola Zero, Pepsi Light, etc.)",
                ],
                "Ninguna seleccionada",
            ),
        )],
    )
    .with_instructions("(Marca todas las que acostumbres)")
    .with_tally(Tally::Beverage)
}
