//! Icon identifiers resolved to a fixed set of inline SVG glyphs

use std::fmt;

/// Every glyph the page can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Code,
    Database,
    Shield,
    Award,
    GraduationCap,
    Briefcase,
}

impl Glyph {
    /// Drawn for identifiers that name no known glyph
    pub const FALLBACK: Glyph = Glyph::Code;

    pub const ALL: [Glyph; 6] = [
        Glyph::Code,
        Glyph::Database,
        Glyph::Shield,
        Glyph::Award,
        Glyph::GraduationCap,
        Glyph::Briefcase,
    ];

    /// Resolve an icon identifier from the content files
    ///
    /// Matching ignores case, `-` and `_`, so `"GraduationCap"`,
    /// `"graduation-cap"` and `"graduation_cap"` are the same glyph.
    pub fn from_name(name: &str) -> Glyph {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "code" => Glyph::Code,
            "database" => Glyph::Database,
            "shield" => Glyph::Shield,
            "award" => Glyph::Award,
            "graduationcap" => Glyph::GraduationCap,
            "briefcase" => Glyph::Briefcase,
            _ => Glyph::FALLBACK,
        }
    }

    /// Kebab-case name, used in CSS classes
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Code => "code",
            Glyph::Database => "database",
            Glyph::Shield => "shield",
            Glyph::Award => "award",
            Glyph::GraduationCap => "graduation-cap",
            Glyph::Briefcase => "briefcase",
        }
    }

    fn paths(&self) -> &'static str {
        match self {
            Glyph::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            Glyph::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/><path d="M3 12c0 1.66 4 3 9 3s9-1.34 9-3"/>"#
            }
            Glyph::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Glyph::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"/>"#
            }
            Glyph::GraduationCap => {
                r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Glyph::Briefcase => {
                r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
            }
        }
    }

    /// Inline SVG markup for this glyph
    pub fn svg(&self) -> String {
        format!(
            r#"<svg class="glyph glyph-{}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name(),
            self.paths()
        )
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
