use intake::{Question, Section, Tally};

use crate::{PICK_ANY, multi, multi_or, pick};

pub(crate) fn sections() -> Vec<Section> {
    vec![
        fatty_protein(),
        lean_protein(),
        healthy_fat(),
        complex_carbs(),
        vegetables(),
        fruit(),
    ]
}

fn fatty_protein() -> Section {
    Section::new(
        "grupo1",
        "GRUPO 1: PROTEÍNA ANIMAL CON MÁS CONTENIDO GRASO",
        vec![
            pick(
                "grupo1_huevos_embutidos",
                "🍳 Huevos y embutidos:",
                PICK_ANY,
                &[
                    "Huevo entero",
                    "Chorizo",
                    "Salchicha (Viena, alemana, parrillera)",
                    "Longaniza",
                    "Tocino",
                    "Jamón serrano",
                ],
            ),
            pick(
                "grupo1_carnes_grasas",
                "🥩 Carnes y cortes grasos:",
                PICK_ANY,
                &[
                    "Costilla de res",
                    "Costilla de cerdo",
                    "Ribeye",
                    "T-bone",
                    "New York",
                    "Arrachera marinada",
                    "Molida 80/20 (regular)",
                    "Molida 85/15",
                    "Cecina con grasa",
                ],
            ),
            pick(
                "grupo1_quesos_altos",
                "🧀 Quesos altos en grasa:",
                PICK_ANY,
                &[
                    "Queso manchego",
                    "Queso doble crema",
                    "Queso oaxaca",
                    "Queso gouda",
                    "Queso crema",
                    "Queso cheddar",
                ],
            ),
            pick(
                "grupo1_lacteos_enteros",
                "🥛 Lácteos enteros:",
                PICK_ANY,
                &[
                    "Leche entera",
                    "Yogur entero azucarado",
                    "Yogur tipo griego entero",
                    "Yogur de frutas azucarado",
                    "Yogur bebible regular",
                    "Crema",
                    "Queso para untar (tipo Philadelphia original)",
                ],
            ),
            pick(
                "grupo1_pescados_grasos",
                "🐟 Pescados grasos:",
                PICK_ANY,
                &["Atún en aceite", "Salmón", "Sardinas", "Macarela", "Trucha"],
            ),
        ],
    )
    .with_instructions("(elige todas las que puedas consumir con facilidad)")
    .with_tally(Tally::FattyProtein)
}

fn lean_protein() -> Section {
    Section::new(
        "grupo2",
        "GRUPO 2: PROTEÍNA ANIMAL MAGRA",
        vec![
            pick(
                "grupo2_carnes_magras",
                "🍗 Carnes y cortes magros:",
                PICK_ANY,
                &[
                    "Pechuga de pollo sin piel",
                    "Filete de res magro (aguayón, bola, sirloin sin grasa visible)",
                    "Lomo de cerdo",
                    "Bistec de res sin grasa visible",
                    "Cecina magra",
                    "Molida 90/10",
                    "Molida 95/5",
                    "Molida 97/3",
                    "Carne para deshebrar sin grasa (falda limpia)",
                ],
            ),
            pick(
                "grupo2_pescados_blancos",
                "🐟 Pescados blancos y bajos en grasa:",
                PICK_ANY,
                &[
                    "Tilapia",
                    "Basa",
                    "Huachinango",
                    "Merluza",
                    "Robalo",
                    "Atún en agua",
                ],
            ),
            pick(
                "grupo2_quesos_magros",
                "🧀 Quesos bajos en grasa o magros:",
                PICK_ANY,
                &[
                    "Queso panela",
                    "Queso cottage",
                    "Queso ricotta light",
                    "Queso oaxaca reducido en grasa",
                    "Queso mozzarella light",
                    "Queso fresco bajo en grasa",
                ],
            ),
            pick(
                "grupo2_lacteos_light",
                "🥛 Lácteos light o reducidos:",
                PICK_ANY,
                &[
                    "Leche descremada",
                    "Leche deslactosada light",
                    "Leche de almendra sin azúcar",
                    "Leche de coco sin azúcar",
                    "Leche de soya sin azúcar",
                    "Yogur griego natural sin azúcar",
                    "Yogur griego light",
                    "Yogur bebible bajo en grasa",
                    "Yogur sin azúcar añadida",
                    "Yogur de frutas bajo en grasa y sin azúcar añadida",
                    "Queso crema light",
                ],
            ),
            pick(
                "grupo2_otros",
                "🥚 Otros:",
                PICK_ANY,
                &[
                    "Clara de huevo",
                    "Jamón de pechuga de pavo",
                    "Jamón de pierna bajo en grasa",
                    "Salchicha de pechuga de pavo (light)",
                ],
            ),
        ],
    )
    .with_instructions("(elige todas las que te sean fáciles de consumir)")
    .with_tally(Tally::LeanProtein)
}

fn healthy_fat() -> Section {
    Section::new(
        "grupo3",
        "GRUPO 3: FUENTES DE GRASA SALUDABLE",
        vec![
            pick(
                "grupo3_grasas_naturales",
                "🥑 Grasas naturales de alimentos:",
                PICK_ANY,
                &[
                    "Aguacate",
                    "Yema de huevo",
                    "Aceitunas (negras, verdes)",
                    "Coco rallado natural",
                    "Coco fresco",
                    "Leche de coco sin azúcar",
                ],
            ),
            pick(
                "grupo3_frutos_secos",
                "🌰 Frutos secos y semillas:",
                PICK_ANY,
                &[
                    "Almendras",
                    "Nueces",
                    "Nuez de la India",
                    "Pistaches",
                    "Cacahuates naturales (sin sal)",
                    "Semillas de chía",
                    "Semillas de linaza",
                    "Semillas de girasol",
                    "Semillas de calabaza (pepitas)",
                ],
            ),
            pick(
                "grupo3_mantequillas",
                "🧈 Mantequillas y pastas vegetales:",
                PICK_ANY,
                &[
                    "Mantequilla de maní natural",
                    "Mantequilla de almendra",
                    "Tahini (pasta de ajonjolí)",
                    "Mantequilla de nuez de la India",
                ],
            ),
        ],
    )
    .with_instructions("(elige todas las que puedas o suelas consumir)")
    .with_tally(Tally::HealthyFat)
}

fn complex_carbs() -> Section {
    Section::new(
        "grupo4",
        "GRUPO 4: CARBOHIDRATOS COMPLEJOS Y CEREALES",
        vec![
            pick(
                "grupo4_cereales",
                "🌾 Cereales y granos integrales:",
                PICK_ANY,
                &[
                    "Avena tradicional",
                    "Avena instantánea sin azúcar",
                    "Arroz integral",
                    "Arroz blanco",
                    "Arroz jazmín",
                    "Arroz basmati",
                    "Trigo bulgur",
                    "Cuscús",
                    "Quinoa",
                    "Amaranto",
                    "Trigo inflado natural",
                    "Cereal de maíz sin azúcar",
                    "Cereal integral bajo en azúcar",
                ],
            ),
            pick(
                "grupo4_tortillas_panes",
                "🌽 Tortillas y panes:",
                PICK_ANY,
                &[
                    "Tortilla de maíz",
                    "Tortilla de nopal",
                    "Tortilla integral",
                    "Tortilla de harina",
                    "Pan integral",
                    "Pan multigrano",
                    "Pan de centeno",
                    "Pan de caja sin azúcar añadida",
                    "Pan pita integral",
                    "Pan tipo Ezekiel (germinado)",
                ],
            ),
            pick(
                "grupo4_tuberculos",
                "🥔 Raíces, tubérculos y derivados:",
                PICK_ANY,
                &[
                    "Papa cocida o al horno",
                    "Camote cocido o al horno",
                    "Yuca",
                    "Plátano macho",
                    "Puré de papa",
                    "Papas horneadas",
                    "Papas en air fryer",
                ],
            ),
            pick(
                "grupo4_leguminosas",
                "🫘 Leguminosas:",
                PICK_ANY,
                &[
                    "Frijoles negros",
                    "Frijoles bayos",
                    "Frijoles pintos",
                    "Lentejas",
                    "Garbanzos",
                    "Habas cocidas",
                    "Soya texturizada",
                    "Edamames (vainas de soya)",
                    "Hummus (puré de garbanzo)",
                ],
            ),
        ],
    )
    .with_instructions("(elige todos los que consumas con facilidad)")
    .with_tally(Tally::ComplexCarb)
}

fn vegetables() -> Section {
    Section::new(
        "grupo5",
        "GRUPO 5: VEGETALES",
        vec![Question::new(
            "grupo5_vegetales",
            "Selecciona todos los vegetales que puedas consumir:",
            multi(&[
                "Espinaca",
                "Acelga",
                "Kale",
                "Lechuga (romana, italiana, orejona, iceberg)",
                "Col morada",
                "Col verde",
                "Repollo",
                "Brócoli",
                "Coliflor",
                "Ejote",
                "Chayote",
                "Calabacita",
                "Nopal",
                "Betabel",
                "Zanahoria",
                "Jitomate saladet",
                "Jitomate bola",
                "Tomate verde",
                "Cebolla blanca",
                "Cebolla morada",
                "Pimiento morrón (rojo, verde, amarillo, naranja)",
                "Pepino",
                "Apio",
                "Rábano",
                "Ajo",
                "Berenjena",
                "Champiñones",
                "Guisantes (chícharos)",
                "Verdolaga",
                "Habas tiernas",
                "Germen de alfalfa",
                "Germen de soya",
                "Flor de calabaza",
            ]),
        )],
    )
    .with_instructions("(elige todos los que consumes o toleras fácilmente)")
    .with_tally(Tally::Vegetable)
}

fn fruit() -> Section {
    Section::new(
        "grupo6",
        "GRUPO 6: FRUTAS",
        vec![Question::new(
            "grupo6_frutas",
            "Selecciona todas las frutas que puedas consumir:",
            multi_or(
                &[
                    "Manzana (roja, verde, gala, fuji)",
                    "Naranja",
                    "Mandarina",
                    "Mango (petacón, ataulfo)",
                    "Papaya",
                    "Sandía",
                    "Melón",
                    "Piña",
                    "Plátano (tabasco, dominico, macho)",
                    "Uvas",
                    "Fresas",
                    "Arándanos",
                    "Zarzamoras",
                    "Frambuesas",
                    "Higo",
                    "Kiwi",
                    "Pera",
                    "Durazno",
                    "Ciruela",
                    "Granada",
                    "Cereza",
                    "Chabacano",
                    "Lima",
                    "Limón",
                    "Guayaba",
                    "Tuna",
                    "Níspero",
                    "Mamey",
                    "Pitahaya (dragon fruit)",
                    "Tamarindo",
                    "Coco (carne, rallado)",
                    "Caqui (persimón)",
                    "Maracuyá",
                    "Manzana en puré sin azúcar",
                    "Fruta en almíbar light",
                ],
                "Ninguna seleccionada",
            ),
        )],
    )
    .with_instructions("(elige todas las que disfrutes o toleres bien)")
    .with_tally(Tally::Fruit)
}
