use intake::{Section, Tally, TextQuestion};

use crate::{pick, text};

pub(crate) fn section() -> Section {
    Section::new(
        "antojos",
        "SECCIÓN DE ANTOJOS ALIMENTARIOS",
        vec![
            pick(
                "antojos_dulces",
                "🍫 Alimentos dulces / postres:",
                "Selecciona todos los alimentos dulces que se te antojen:",
                &[
                    "Chocolate con leche",
                    "Chocolate amargo",
                    "Pan dulce (conchas, donas, cuernitos)",
                    "Pastel (tres leches, chocolate, etc.)",
                    "Galletas (Marías, Emperador, Chokis, etc.)",
                    "Helado / Nieve",
                    "Flan / Gelatina",
                    "Dulces tradicionales (cajeta, obleas, jamoncillo, glorias)",
                    "Cereal azucarado",
                    "Leche condensada",
                    "Churros",
                ],
            ),
            pick(
                "antojos_salados",
                "🧂 Alimentos salados / snacks:",
                "Selecciona todos los alimentos salados que se te antojen:",
                &[
                    "Papas fritas (Sabritas, Ruffles, etc.)",
                    "Cacahuates enchilados",
                    "Frituras (Doritos, Cheetos, Takis, etc.)",
                    "Totopos con salsa",
                    "Galletas saladas",
                    "Cacahuates japoneses",
                    "Chicharrón (de cerdo o harina)",
                    "Nachos con queso",
                    "Queso derretido o gratinado",
                ],
            ),
            pick(
                "antojos_comida_rapida",
                "🌮 Comidas rápidas / callejeras:",
                "Selecciona todas las comidas rápidas que se te antojen:",
                &[
                    "Tacos (pastor, asada, birria, etc.)",
                    "Tortas (cubana, ahogada, etc.)",
                    "Hamburguesas",
                    "Hot dogs",
                    "Pizza",
                    "Quesadillas fritas",
                    "Tamales",
                    "Pambazos",
                    "Sopes / gorditas",
                    "Elotes / esquites",
                    "Burritos",
                    "Enchiladas",
                    "Empanadas",
                ],
            ),
            pick(
                "antojos_bebidas",
                "🍹 Bebidas y postres líquidos:",
                "Selecciona todas las bebidas que se te antojen:",
                &[
                    "Refrescos regulares (Coca-Cola, Fanta, etc.)",
                    "Jugos industrializados (Boing, Jumex, etc.)",
                    "Malteadas / Frappés",
                    "Agua de sabor con azúcar (jamaica, horchata, tamarindo)",
                    "Café con azúcar y leche",
                    "Champurrado / atole",
                    "Licuado de plátano con azúcar",
                    "Bebidas alcohólicas (cerveza, tequila, vino, etc.)",
                ],
            ),
            pick(
                "antojos_condimentos",
                "🔥 Alimentos con condimentos estimulantes:",
                "Selecciona todos los que se te antojen:",
                &[
                    "Chiles en escabeche",
                    "Salsas picantes",
                    "Salsa Valentina, Tajín o Chamoy",
                    "Pepinos con chile y limón",
                    "Mangos verdes con chile",
                    "Gomitas enchiladas",
                    "Fruta con Miguelito o chile en polvo",
                ],
            ),
            text(
                "otros_antojos",
                "❓ Otros antojos especificados:",
                "¿Qué otros alimentos o preparaciones se te antojan mucho y no aparecen en esta lista?",
                TextQuestion::multiline(),
            ),
        ],
    )
    .with_instructions(
        "Marca los alimentos que frecuentemente se te antojan o deseas con intensidad, aunque no \
         necesariamente los consumas con regularidad. Puedes marcar tantos como necesites.",
    )
    .with_tally(Tally::Craving)
}
