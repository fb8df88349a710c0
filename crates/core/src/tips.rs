//! Static prompt-writing tips served by the optimize API.

use serde::Serialize;

/// A group of related tips.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TipGroup {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

/// The full tips catalogue.
pub const OPTIMIZATION_TIPS: &[TipGroup] = &[
    TipGroup {
        category: "Clarity",
        tips: &[
            "Be specific about what you want the AI to do",
            "Use clear and concise language",
            "Avoid ambiguous terms or phrases",
        ],
    },
    TipGroup {
        category: "Structure",
        tips: &[
            "Start with a clear role definition",
            "Define the task explicitly",
            "Specify the desired output format",
        ],
    },
    TipGroup {
        category: "Context",
        tips: &[
            "Provide relevant background information",
            "Include examples when helpful",
            "Mention any constraints or limitations",
        ],
    },
    TipGroup {
        category: "Tone",
        tips: &[
            "Specify the desired tone (professional, casual, etc.)",
            "Use polite language",
            "Be respectful in your requests",
        ],
    },
];
