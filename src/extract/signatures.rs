//! Declarative signature table.
//!
//! Each entry names the phrases that identify a rule failure in test-runner
//! output, how many surrounding lines to inspect, which details to pull from
//! those lines, and the record template the details are substituted into.
//! Table order is significant: it decides match order on a shared line.

use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureId {
    Label,
    ColorContrast,
    LabelTitleOnly,
    AriaDescribedbyRefer,
    LabelAssociation,
}

impl SignatureId {
    /// Rule identifier as used by axe-core and the WCAG lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::ColorContrast => "color-contrast",
            Self::LabelTitleOnly => "label-title-only",
            Self::AriaDescribedbyRefer => "aria-describedby-refer",
            Self::LabelAssociation => "label-association",
        }
    }
}

impl std::fmt::Display for SignatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value chosen when every needle occurs somewhere in the context window.
#[derive(Debug)]
pub struct LookupRule {
    pub needles: &'static [&'static str],
    pub value: &'static str,
}

/// Produces one template variable from a context window.
#[derive(Debug)]
pub enum DetailExtractor {
    /// First matching rule wins; `fallback` when none match.
    Lookup {
        var: &'static str,
        rules: &'static [LookupRule],
        fallback: &'static str,
    },
    /// Capture groups of the first match joined with `separator`.
    Capture {
        var: &'static str,
        pattern: Regex,
        separator: &'static str,
        fallback: &'static str,
    },
}

impl DetailExtractor {
    pub fn var(&self) -> &'static str {
        match self {
            Self::Lookup { var, .. } | Self::Capture { var, .. } => var,
        }
    }
}

/// Static text of a violation record. Fields may contain `{var}` placeholders.
#[derive(Debug)]
pub struct RecordTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub elements: &'static [&'static str],
    pub remediation: &'static str,
    pub file: &'static str,
    pub wcag_reference: &'static str,
    pub problem: &'static str,
    pub fix: &'static str,
    pub engine_detail: &'static str,
}

#[derive(Debug)]
pub struct Signature {
    pub id: SignatureId,
    /// A line matches when it contains any of these phrases.
    pub triggers: &'static [&'static str],
    /// Lines inspected before the matched line.
    pub before: usize,
    /// Lines inspected from the matched line onwards (inclusive).
    pub after: usize,
    pub extractors: Vec<DetailExtractor>,
    pub template: RecordTemplate,
}

impl Signature {
    pub fn matches(&self, line: &str) -> bool {
        self.triggers.iter().any(|t| line.contains(t))
    }
}

const LABEL_ELEMENTS: &[LookupRule] = &[
    LookupRule { needles: &["#name"], value: "Campo Nome (id=\"name\")" },
    LookupRule { needles: &["#email-field"], value: "Campo Email (id=\"email-field\")" },
    LookupRule { needles: &["#message"], value: "Campo Mensagem (textarea) (id=\"message\")" },
];

const CONTRAST_ELEMENTS: &[LookupRule] = &[
    LookupRule {
        needles: &["background-color", "#ffff00"],
        value: "Botão amarelo com texto branco (background: #ffff00, color: #ffffff)",
    },
    LookupRule {
        needles: &["#aaaaaa"],
        value: "Texto cinza claro sobre fundo branco (color: #aaaaaa, background: #ffffff)",
    },
    LookupRule {
        needles: &["#cccccc"],
        value: "Link com cor muito clara (color: #cccccc, background: #f8f8f8)",
    },
    LookupRule {
        needles: &["#ff9999"],
        value: "Texto rosa sobre fundo vermelho (color: #ff9999, background: #ff6b6b)",
    },
];

pub static SIGNATURES: LazyLock<Vec<Signature>> = LazyLock::new(|| vec![
    Signature {
        id: SignatureId::Label,
        triggers: &["Form elements must have labels (label)"],
        before: 10,
        after: 15,
        extractors: vec![DetailExtractor::Lookup {
            var: "element",
            rules: LABEL_ELEMENTS,
            fallback: "Campo de formulário",
        }],
        template: RecordTemplate {
            title: "Elementos de formulário devem ter labels",
            description: "Form elements must have labels (label) - axe-core rule",
            impact: "Usuários de leitores de tela não conseguem identificar a função do campo",
            elements: &["{element}"],
            remediation: "Conectar <label> ao <input> usando atributo htmlFor",
            file: "src/components/Form.js",
            wcag_reference: "WCAG 1.3.1 - Info and Relationships",
            problem: "<label>Nome *</label><input id=\"name\" ...>",
            fix: "<label htmlFor=\"name\">Nome *</label><input id=\"name\" ...>",
            engine_detail: "Form element does not have an explicit <label>",
        },
    },
    Signature {
        id: SignatureId::ColorContrast,
        triggers: &["color-contrast", "Elements must have sufficient color contrast"],
        before: 0,
        after: 20,
        extractors: vec![
            DetailExtractor::Capture {
                var: "ratio",
                pattern: Regex::new(r"contrast ratio of ([\d.]+):([\d.]+)")
                    .expect("contrast ratio pattern is valid"),
                separator: ":",
                fallback: "insuficiente",
            },
            DetailExtractor::Lookup {
                var: "element",
                rules: CONTRAST_ELEMENTS,
                fallback: "Elemento com cores problemáticas",
            },
        ],
        template: RecordTemplate {
            title: "Contraste de cores insuficiente",
            description: "Elements must have sufficient color contrast (color-contrast) - Ratio: {ratio}",
            impact: "Usuários com baixa visão, daltonismo ou em ambientes claros não conseguem ler o texto",
            elements: &["{element}"],
            remediation: "Usar cores com contraste mínimo de 4.5:1 para texto normal ou 3:1 para texto grande",
            file: "src/App.js",
            wcag_reference: "WCAG 1.4.3 - Contrast (Minimum)",
            problem: "color: #aaaaaa; background: #ffffff; /* 2.32:1 */",
            fix: "color: #333333; background: #ffffff; /* 12.63:1 */",
            engine_detail: "Contraste atual: {ratio}, mínimo necessário: 4.5:1",
        },
    },
    Signature {
        id: SignatureId::LabelTitleOnly,
        triggers: &["Form elements should have a visible label (label-title-only)"],
        before: 0,
        after: 1,
        extractors: Vec::new(),
        template: RecordTemplate {
            title: "Elementos de formulário precisam de labels visíveis",
            description: "Form elements should have a visible label (label-title-only)",
            impact: "Labels invisíveis ou inadequados dificultam a navegação",
            elements: &["Campos com labels não conectados adequadamente"],
            remediation: "Usar <label> com htmlFor em vez de <span> ou labels não conectados",
            file: "src/components/Form.js",
            wcag_reference: "WCAG 1.3.1 - Info and Relationships",
            problem: "<span style=\"font-weight: bold;\">Email *</span>",
            fix: "<label htmlFor=\"email-field\">Email *</label>",
            engine_detail: "Only title used to generate label for form element",
        },
    },
    Signature {
        id: SignatureId::AriaDescribedbyRefer,
        triggers: &["aria-describedby=\"name-error-nonexistent\""],
        before: 0,
        after: 1,
        extractors: Vec::new(),
        template: RecordTemplate {
            title: "ARIA-describedby referencia elemento inexistente",
            description: "Atributo aria-describedby aponta para ID que não existe no DOM",
            impact: "Leitores de tela não conseguem anunciar mensagens de erro associadas",
            elements: &["Input nome com aria-describedby=\"name-error-nonexistent\""],
            remediation: "Corrigir ID para corresponder ao elemento de erro real",
            file: "src/components/Form.js",
            wcag_reference: "WCAG 4.1.2 - Name, Role, Value",
            problem: "aria-describedby=\"name-error-nonexistent\"",
            fix: "aria-describedby=\"name-error\"",
            engine_detail: "References elements that do not exist",
        },
    },
    Signature {
        id: SignatureId::LabelAssociation,
        triggers: &["no form control was found associated to that label"],
        before: 0,
        after: 1,
        extractors: Vec::new(),
        template: RecordTemplate {
            title: "Label não associado ao controle de formulário",
            description: "Testing Library: no form control was found associated to that label",
            impact: "Ferramentas de teste e leitores de tela não encontram conexão label-input",
            elements: &["Label \"Nome *\" sem for=\"name\"", "Label \"Mensagem *\" sem for=\"message\""],
            remediation: "Adicionar atributo htmlFor/for nos elementos <label>",
            file: "src/components/Form.js",
            wcag_reference: "WCAG 1.3.1 - Info and Relationships",
            problem: "<label>Nome *</label>",
            fix: "<label htmlFor=\"name\">Nome *</label>",
            engine_detail: "Make sure you're using the \"for\" attribute correctly",
        },
    },
]);

/// Look up a signature by identifier.
pub fn signature(id: SignatureId) -> &'static Signature {
    SIGNATURES
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| unreachable!("every SignatureId has a table entry"))
}
