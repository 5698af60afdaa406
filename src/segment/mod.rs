//! Market segment lookup by CEST prefix.
//!
//! The first two digits of a CEST code identify the ST segment
//! (Convênio ICMS 142/2018, Anexos II to XXVI). Anything without a mapped
//! prefix falls back to [`FALLBACK_SEGMENT`].

/// Label for products outside any ST segment (tax anticipation).
pub const FALLBACK_SEGMENT: &str = "Antecipação";

/// Segment label for a CEST code. Total: never fails.
pub fn segment_for(cest: &str) -> &'static str {
    let mut chars = cest.char_indices();
    let end = match (chars.next(), chars.next()) {
        (Some(_), Some((i, c))) => i + c.len_utf8(),
        _ => return FALLBACK_SEGMENT,
    };
    SEGMENTS
        .binary_search_by(|(prefix, _)| (*prefix).cmp(&cest[..end]))
        .map(|i| SEGMENTS[i].1)
        .unwrap_or(FALLBACK_SEGMENT)
}

/// CEST two-digit prefixes and their segment names. Sorted for binary search.
static SEGMENTS: &[(&str, &str)] = &[
    ("01", "Autopeças"),
    ("02", "Bebidas Alcoólicas, exceto Cerveja e Chope"),
    ("03", "Cervejas, Chopes, Refrigerantes, Águas e Outras Bebidas"),
    ("04", "Cigarros e Outros Produtos Derivados do Fumo"),
    ("05", "Cimentos"),
    ("06", "Combustíveis e Lubrificantes"),
    ("07", "Energia Elétrica"),
    ("08", "Ferramentas"),
    ("09", "Lâmpadas, Reatores e \"Starter\""),
    ("10", "Materiais de Construção e Congêneres"),
    ("11", "Materiais de Limpeza"),
    ("12", "Materiais Elétricos"),
    ("13", "Medicamentos de Uso Humano e Outros Produtos Farmacêuticos"),
    ("14", "Papéis, Plásticos, Produtos Cerâmicos e Vidros"),
    ("16", "Pneumáticos, Câmaras de Ar e Protetores de Borracha"),
    ("17", "Produtos Alimentícios"),
    ("19", "Produtos de Papelaria"),
    ("20", "Produtos de Perfumaria e de Higiene Pessoal e Cosméticos"),
    ("21", "Produtos Eletrônicos, Eletroeletrônicos e Eletrodomésticos"),
    ("22", "Rações para Animais Domésticos"),
    ("23", "Sorvetes e Preparados para Fabricação de Sorvetes em Máquinas"),
    ("24", "Tintas e Vernizes"),
    ("25", "Veículos Automotores"),
    ("26", "Veículos de Duas e Três Rodas Motorizados"),
    ("28", "Venda de Mercadorias pelo Sistema Porta a Porta"),
];
