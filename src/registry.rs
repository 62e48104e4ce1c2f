//! The question type registry. Everything the builder knows about a type
//! lives in one static descriptor: picker label, editable option groups,
//! settings fields and the seeded demo content. Adding a type means adding
//! an enum variant and a `REGISTRY` entry; the editors and the preview are
//! generated from the descriptor.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::models::{Question, SettingValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleSingle,
    MultipleMulti,
    Likert,
    Matrix,
    Nps,
    Stars,
    Emoji,
    Slider,
    TextShort,
    TextLong,
    Ranking,
    Images,
    #[serde(rename = "yesno")]
    YesNo,
}

impl QuestionType {
    /// Picker order. Must stay aligned with `REGISTRY`.
    pub const ALL: [Self; 13] = [
        Self::MultipleSingle,
        Self::MultipleMulti,
        Self::Likert,
        Self::Matrix,
        Self::Nps,
        Self::Stars,
        Self::Emoji,
        Self::Slider,
        Self::TextShort,
        Self::TextLong,
        Self::Ranking,
        Self::Images,
        Self::YesNo,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::MultipleSingle => "multiple-single",
            Self::MultipleMulti => "multiple-multi",
            Self::Likert => "likert",
            Self::Matrix => "matrix",
            Self::Nps => "nps",
            Self::Stars => "stars",
            Self::Emoji => "emoji",
            Self::Slider => "slider",
            Self::TextShort => "text-short",
            Self::TextLong => "text-long",
            Self::Ranking => "ranking",
            Self::Images => "images",
            Self::YesNo => "yesno",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn config(self) -> &'static TypeConfig {
        &REGISTRY[self as usize]
    }
}

/// One editable list of strings on a question (answer options, matrix rows,
/// likert statements, ...).
#[derive(Debug)]
pub struct OptionGroupSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Entries cannot be removed below this count, and saving requires at
    /// least this many non-blank entries.
    pub min: usize,
    /// No further entries can be added at this count.
    pub max: Option<usize>,
    pub add_label: &'static str,
    /// Base label for newly added entries and input placeholder.
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Number,
    Text,
}

impl SettingKind {
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

/// One generated input in the settings editor. `min`/`max` only constrain
/// the input element; renderers clamp for themselves.
#[derive(Debug)]
pub struct SettingFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: SettingKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug)]
pub enum DefaultSetting {
    Number(f64),
    Text(&'static str),
}

/// Full descriptor for one question type.
#[derive(Debug)]
pub struct TypeConfig {
    pub kind: QuestionType,
    pub label: &'static str,
    pub option_groups: &'static [OptionGroupSpec],
    pub settings_fields: &'static [SettingFieldSpec],
    pub default_title: &'static str,
    pub default_description: &'static str,
    pub default_info: &'static str,
    pub default_options: &'static [(&'static str, &'static [&'static str])],
    pub default_settings: &'static [(&'static str, DefaultSetting)],
}

impl TypeConfig {
    pub fn group(&self, key: &str) -> Option<&'static OptionGroupSpec> {
        self.option_groups.iter().find(|group| group.key == key)
    }

    pub fn setting_field(&self, key: &str) -> Option<&'static SettingFieldSpec> {
        self.settings_fields.iter().find(|field| field.key == key)
    }
}

/// A fresh question of the given type, seeded with the registry's demo
/// content so the preview shows something meaningful right away.
pub fn new_question(kind: QuestionType) -> Question {
    let config = kind.config();
    let mut question = Question {
        id: generate_id(),
        question_type: kind,
        title: config.default_title.to_string(),
        description: config.default_description.to_string(),
        info: config.default_info.to_string(),
        options: Default::default(),
        settings: Default::default(),
        image_choices: Vec::new(),
    };
    for (key, items) in config.default_options {
        question.options.insert(
            (*key).to_string(),
            items.iter().map(|item| (*item).to_string()).collect(),
        );
    }
    for (key, value) in config.default_settings {
        let value = match value {
            DefaultSetting::Number(n) => SettingValue::Number(*n),
            DefaultSetting::Text(s) => SettingValue::Text((*s).to_string()),
        };
        question.settings.insert((*key).to_string(), value);
    }
    question
}

fn generate_id() -> String {
    format!("q-{}", Ulid::new().to_string().to_lowercase())
}

pub static REGISTRY: [TypeConfig; 13] = [
    TypeConfig {
        kind: QuestionType::MultipleSingle,
        label: "Multiple Choice (Einfachauswahl)",
        option_groups: &[OptionGroupSpec {
            key: "options",
            label: "Antwortoptionen",
            min: 2,
            max: None,
            add_label: "Option hinzufügen",
            placeholder: "Option",
        }],
        settings_fields: &[],
        default_title: "Multiple Choice (Einfachauswahl)",
        default_description: "Wie sind Sie auf unser Produkt aufmerksam geworden?",
        default_info: "Eindeutige Kategorisierung und klare Präferenzen. Der Nutzer kann nur eine Option wählen.",
        default_options: &[(
            "options",
            &["Google-Suche", "Social Media", "Empfehlung", "Online-Werbung", "Zeitschrift/Zeitung"],
        )],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::MultipleMulti,
        label: "Multiple Choice (Mehrfachauswahl)",
        option_groups: &[OptionGroupSpec {
            key: "options",
            label: "Antwortoptionen",
            min: 2,
            max: None,
            add_label: "Option hinzufügen",
            placeholder: "Option",
        }],
        settings_fields: &[],
        default_title: "Multiple Choice (Mehrfachauswahl)",
        default_description: "Welche Features nutzen Sie regelmäßig? (Mehrfachauswahl möglich)",
        default_info: "Ideal für Prioritätenlisten, Funktionsumfang oder Nutzungsverhalten.",
        default_options: &[(
            "options",
            &["Dashboard", "Reporting-Funktion", "Automatisierte Alerts", "Mobile App", "Integrationen"],
        )],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::Likert,
        label: "Likert-Skala",
        option_groups: &[
            OptionGroupSpec {
                key: "statements",
                label: "Aussagen",
                min: 1,
                max: None,
                add_label: "Aussage hinzufügen",
                placeholder: "Aussage",
            },
            OptionGroupSpec {
                key: "scale",
                label: "Antwortskala",
                min: 2,
                max: None,
                add_label: "Skalapunkt hinzufügen",
                placeholder: "Skalapunkt",
            },
        ],
        settings_fields: &[],
        default_title: "Likert-Skala",
        default_description: "Wie zufrieden sind Sie mit den folgenden Bereichen?",
        default_info: "Perfekt für Zufriedenheit und Zustimmung.",
        default_options: &[
            ("statements", &["Produktqualität", "Lieferzeit", "Support", "Preis-Leistungs-Verhältnis"]),
            ("scale", &["Sehr zufrieden", "Zufrieden", "Neutral", "Unzufrieden", "Sehr unzufrieden"]),
        ],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::Matrix,
        label: "Matrix",
        option_groups: &[
            OptionGroupSpec {
                key: "rows",
                label: "Zeilen (Themen)",
                min: 2,
                max: None,
                add_label: "Zeile hinzufügen",
                placeholder: "Thema",
            },
            OptionGroupSpec {
                key: "columns",
                label: "Spalten (Antworten)",
                min: 2,
                max: None,
                add_label: "Spalte hinzufügen",
                placeholder: "Antwort",
            },
        ],
        settings_fields: &[],
        default_title: "Matrix-Frage (Grid)",
        default_description: "Bitte bewerten Sie folgende Aspekte unseres Hotels:",
        default_info: "Effiziente Bewertung mehrerer Items mit gleicher Skala.",
        default_options: &[
            ("rows", &["Zimmerqualität", "Sauberkeit", "Personal", "Frühstück"]),
            ("columns", &["Sehr gut", "Gut", "Befriedigend", "Ausreichend"]),
        ],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::Nps,
        label: "Net Promoter Score",
        option_groups: &[],
        settings_fields: &[
            SettingFieldSpec {
                key: "minScore",
                label: "Startwert",
                kind: SettingKind::Number,
                min: Some(0.0),
                max: None,
            },
            SettingFieldSpec {
                key: "maxScore",
                label: "Endwert",
                kind: SettingKind::Number,
                min: Some(1.0),
                max: None,
            },
            SettingFieldSpec {
                key: "minLabel",
                label: "Linker Hinweis",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "maxLabel",
                label: "Rechter Hinweis",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
        ],
        default_title: "Net Promoter Score (NPS)",
        default_description: "Wie wahrscheinlich würden Sie unser Unternehmen weiterempfehlen?",
        default_info: "Liefert klaren Indikator für Loyalität und Weiterempfehlung.",
        default_options: &[],
        default_settings: &[
            ("minScore", DefaultSetting::Number(0.0)),
            ("maxScore", DefaultSetting::Number(10.0)),
            ("minLabel", DefaultSetting::Text("Überhaupt nicht wahrscheinlich")),
            ("maxLabel", DefaultSetting::Text("Äußerst wahrscheinlich")),
        ],
    },
    TypeConfig {
        kind: QuestionType::Stars,
        label: "Sterne-Bewertung",
        option_groups: &[],
        settings_fields: &[
            SettingFieldSpec {
                key: "starCount",
                label: "Anzahl Sterne",
                kind: SettingKind::Number,
                min: Some(1.0),
                max: Some(10.0),
            },
            SettingFieldSpec {
                key: "leftLabel",
                label: "Linker Hinweis",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "rightLabel",
                label: "Rechter Hinweis",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
        ],
        default_title: "Sterne-Bewertung",
        default_description: "Wie bewerten Sie unseren Support?",
        default_info: "Intuitiv und schnell – ideal für Bewertungen in Sekunden.",
        default_options: &[],
        default_settings: &[
            ("starCount", DefaultSetting::Number(5.0)),
            ("leftLabel", DefaultSetting::Text("Schlecht")),
            ("rightLabel", DefaultSetting::Text("Hervorragend")),
        ],
    },
    TypeConfig {
        kind: QuestionType::Emoji,
        label: "Emoji-Bewertung",
        option_groups: &[OptionGroupSpec {
            key: "emojis",
            label: "Emojis",
            min: 2,
            max: None,
            add_label: "Emoji hinzufügen",
            placeholder: "🙂",
        }],
        settings_fields: &[],
        default_title: "Emoji-Bewertung",
        default_description: "Wie fühlen Sie sich nach der Nutzung unserer App?",
        default_info: "Emotionales Stimmungsbild in Sekunden.",
        default_options: &[("emojis", &["😡", "😕", "😐", "🙂", "😍"])],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::Slider,
        label: "Slider",
        option_groups: &[],
        settings_fields: &[
            SettingFieldSpec {
                key: "min",
                label: "Minimum",
                kind: SettingKind::Number,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "max",
                label: "Maximum",
                kind: SettingKind::Number,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "step",
                label: "Schrittweite",
                kind: SettingKind::Number,
                min: Some(1.0),
                max: None,
            },
            SettingFieldSpec {
                key: "value",
                label: "Startwert",
                kind: SettingKind::Number,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "prefix",
                label: "Prefix",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "suffix",
                label: "Suffix",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
        ],
        default_title: "Budget-Slider",
        default_description: "Welches monatliche Marketingbudget planen Sie ein?",
        default_info: "Ideal für Spannweiten und numerische Eingaben.",
        default_options: &[],
        default_settings: &[
            ("min", DefaultSetting::Number(500.0)),
            ("max", DefaultSetting::Number(5000.0)),
            ("step", DefaultSetting::Number(250.0)),
            ("value", DefaultSetting::Number(2000.0)),
            ("prefix", DefaultSetting::Text("€")),
            ("suffix", DefaultSetting::Text("")),
        ],
    },
    TypeConfig {
        kind: QuestionType::TextShort,
        label: "Kurztext",
        option_groups: &[],
        settings_fields: &[SettingFieldSpec {
            key: "placeholder",
            label: "Platzhalter",
            kind: SettingKind::Text,
            min: None,
            max: None,
        }],
        default_title: "Kurztext-Frage",
        default_description: "Antworten Sie in einem Satz.",
        default_info: "Für Namen, kurze Feedbacks oder Stichworte.",
        default_options: &[],
        default_settings: &[("placeholder", DefaultSetting::Text("Ihre Antwort"))],
    },
    TypeConfig {
        kind: QuestionType::TextLong,
        label: "Langtext",
        option_groups: &[],
        settings_fields: &[
            SettingFieldSpec {
                key: "placeholder",
                label: "Platzhalter",
                kind: SettingKind::Text,
                min: None,
                max: None,
            },
            SettingFieldSpec {
                key: "rows",
                label: "Zeilen",
                kind: SettingKind::Number,
                min: Some(3.0),
                max: None,
            },
        ],
        default_title: "Langtext-Frage",
        default_description: "Beschreiben Sie Ihre Erfahrung ausführlicher.",
        default_info: "Ideal für Testimonials oder ausführliches Feedback.",
        default_options: &[],
        default_settings: &[
            ("placeholder", DefaultSetting::Text("Ihre Nachricht")),
            ("rows", DefaultSetting::Number(4.0)),
        ],
    },
    TypeConfig {
        kind: QuestionType::Ranking,
        label: "Ranking",
        option_groups: &[OptionGroupSpec {
            key: "items",
            label: "Elemente",
            min: 2,
            max: None,
            add_label: "Element hinzufügen",
            placeholder: "Element",
        }],
        settings_fields: &[],
        default_title: "Ranking-Frage",
        default_description: "Ordnen Sie die folgenden Aspekte nach Wichtigkeit.",
        default_info: "Hilft Prioritäten sichtbar zu machen.",
        default_options: &[("items", &["Design", "Preis", "Qualität", "Lieferzeit"])],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::Images,
        label: "Bildauswahl",
        option_groups: &[OptionGroupSpec {
            key: "items",
            label: "Optionen",
            min: 2,
            max: None,
            add_label: "Option hinzufügen",
            placeholder: "Beschreibung",
        }],
        settings_fields: &[],
        default_title: "Bildauswahl (Image Choice)",
        default_description: "Welches Design gefällt Ihnen am besten?",
        default_info: "Perfekt für visuelles Feedback oder Prototyping.",
        default_options: &[("items", &["Design A", "Design B", "Design C", "Design D"])],
        default_settings: &[],
    },
    TypeConfig {
        kind: QuestionType::YesNo,
        label: "Ja/Nein",
        option_groups: &[OptionGroupSpec {
            key: "options",
            label: "Antworten",
            min: 2,
            max: Some(2),
            add_label: "Option hinzufügen",
            placeholder: "Antwort",
        }],
        settings_fields: &[],
        default_title: "Ja/Nein-Frage",
        default_description: "Haben Sie bereits Erfahrung mit diesem Produkt?",
        default_info: "Binäre Entscheidungen, Filter-Fragen oder Screening.",
        default_options: &[("options", &["Ja", "Nein"])],
        default_settings: &[],
    },
];
