//! Fixed topical taxonomy for the electricity sector
//!
//! Declaration order matters: lexical scoring breaks ties by it, and the
//! last entry is the default "Other" category.

/// One top-level taxonomy category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Short key (used in prompts and by the reasoning service)
    pub key: &'static str,

    /// Display name stored on records
    pub name: &'static str,

    /// Lowercase keyword triggers for lexical scoring
    pub keywords: &'static [&'static str],

    /// Canonical subcategories
    pub subcategories: &'static [&'static str],
}

/// Key of the default category
pub const OTHER_KEY: &str = "outros";

/// Subcategory assigned to records that fall through to "Other"
pub const GENERIC_SUBCATEGORY: &str = "Geral";

/// The taxonomy, in declaration order
pub const TAXONOMY: &[Category] = &[
    Category {
        key: "tarifas",
        name: "Tarifas e Preços",
        keywords: &["tarifa", "preço", "reajuste", "revisão tarifária", "valor"],
        subcategories: &[
            "Reajuste Tarifário",
            "Revisão Tarifária",
            "Bandeiras Tarifárias",
            "Estrutura Tarifária",
            "Subsídios",
        ],
    },
    Category {
        key: "distribuicao",
        name: "Distribuição de Energia",
        keywords: &["distribuição", "distribuidora", "rede", "fornecimento"],
        subcategories: &[
            "Qualidade do Serviço",
            "Expansão da Rede",
            "Concessão",
            "Perdas Técnicas",
            "Medição",
        ],
    },
    Category {
        key: "transmissao",
        name: "Transmissão de Energia",
        keywords: &["transmissão", "transmissora", "linha", "subestação"],
        subcategories: &["Concessão", "RAP", "Reforços", "Instalações", "Operação"],
    },
    Category {
        key: "geracao",
        name: "Geração de Energia",
        keywords: &["geração", "geradora", "usina", "produção", "outorga"],
        subcategories: &[
            "Geração Distribuída",
            "Energia Renovável",
            "Térmica",
            "Hidrelétrica",
            "Autorização",
        ],
    },
    Category {
        key: "consumidor",
        name: "Direitos do Consumidor",
        keywords: &["consumidor", "cliente", "usuário", "reclamação"],
        subcategories: &[
            "Atendimento",
            "Faturamento",
            "Religação",
            "Compensação",
            "Ressarcimento",
        ],
    },
    Category {
        key: "fiscalizacao",
        name: "Fiscalização e Regulação",
        keywords: &["fiscalização", "multa", "penalidade", "infração", "autuação"],
        subcategories: &[
            "Penalidades",
            "Processos Sancionadores",
            "Compliance",
            "Indicadores",
            "Auditoria",
        ],
    },
    Category {
        key: "economico_financeiro",
        name: "Aspectos Econômico-Financeiros",
        keywords: &["financeiro", "econômico", "investimento", "receita", "custo"],
        subcategories: &[
            "Base de Remuneração",
            "WACC",
            "Investimentos",
            "Custos Operacionais",
            "Receitas",
        ],
    },
    Category {
        key: "ambiental",
        name: "Aspectos Ambientais",
        keywords: &["ambiental", "meio ambiente", "licenciamento", "sustentabilidade"],
        subcategories: &[
            "Licenciamento",
            "Compensação Ambiental",
            "Impactos",
            "Recuperação",
            "Estudos",
        ],
    },
    Category {
        key: "comercializacao",
        name: "Comercialização de Energia",
        keywords: &["comercialização", "mercado", "acl", "acr", "leilão"],
        subcategories: &[
            "Mercado Livre",
            "Mercado Regulado",
            "Contratos",
            "Leilões",
            "CCEE",
        ],
    },
    Category {
        key: OTHER_KEY,
        name: "Outros Assuntos",
        keywords: &[],
        subcategories: &[
            "Administrativo",
            "Recursos Humanos",
            "Tecnologia",
            "Pesquisa",
            "Diversos",
        ],
    },
];

/// The default "Other" category
pub fn other() -> &'static Category {
    by_key(OTHER_KEY).unwrap_or(&TAXONOMY[TAXONOMY.len() - 1])
}

/// Look up a category by key, case-insensitively
pub fn by_key(key: &str) -> Option<&'static Category> {
    let key = key.trim().to_lowercase();
    TAXONOMY.iter().find(|c| c.key == key)
}

/// Look up a category by display name, case-insensitively
pub fn by_name(name: &str) -> Option<&'static Category> {
    let name = name.trim().to_lowercase();
    TAXONOMY.iter().find(|c| c.name.to_lowercase() == name)
}

/// Map a key or display name to its category, defaulting to "Other"
pub fn resolve(key_or_name: &str) -> &'static Category {
    by_key(key_or_name)
        .or_else(|| by_name(key_or_name))
        .unwrap_or_else(other)
}

/// Whether `name` is the display name of a taxonomy category
pub fn is_member(name: &str) -> bool {
    TAXONOMY.iter().any(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_last_and_has_no_keywords() {
        let last = TAXONOMY.last().unwrap();
        assert_eq!(last.key, OTHER_KEY);
        assert!(last.keywords.is_empty());
        assert_eq!(other().name, "Outros Assuntos");
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in TAXONOMY.iter().enumerate() {
            for b in &TAXONOMY[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in TAXONOMY {
            for keyword in category.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{}", category.key);
            }
        }
    }

    #[test]
    fn test_every_category_has_two_subcategories() {
        assert!(TAXONOMY.iter().all(|c| c.subcategories.len() >= 2));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(by_key("TARIFAS").unwrap().name, "Tarifas e Preços");
        assert_eq!(by_name("tarifas e preços").unwrap().key, "tarifas");
        assert_eq!(by_name("DISTRIBUIÇÃO DE ENERGIA").unwrap().key, "distribuicao");
        assert!(by_key("unknown").is_none());
    }

    #[test]
    fn test_resolve_defaults_to_other() {
        assert_eq!(resolve("geracao").name, "Geração de Energia");
        assert_eq!(resolve("Aspectos Ambientais").key, "ambiental");
        assert_eq!(resolve("astrologia").key, OTHER_KEY);
        assert_eq!(resolve("").key, OTHER_KEY);
    }

    #[test]
    fn test_membership() {
        assert!(is_member("Outros Assuntos"));
        assert!(is_member("Comercialização de Energia"));
        assert!(!is_member("comercializacao"));
    }
}
