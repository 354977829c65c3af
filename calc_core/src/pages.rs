//! # Calculator Pages
//!
//! Everything a calculator page needs besides the calculation itself: route
//! path, title and description for metadata, FAQ entries, and a markdown
//! body. [`render_fragment`] assembles them with the current
//! [`CalculatorState`] into an HTML fragment.
//!
//! ## Fragment Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ ← Back to <site>             │  nav (shared chrome)
//! │ <h1>title</h1>               │
//! │ description                  │
//! │ fields (label: value)        │
//! │ result | error message       │
//! │ body (markdown → HTML)       │
//! │ FAQ list + JSON-LD script    │  omitted when there are no FAQs
//! │ footer                       │  shared chrome
//! └──────────────────────────────┘
//! ```

use serde::Serialize;

use crate::formulas::registry::{Calculator, CalculatorCategory, CalculatorMetadata};
use crate::markdown::render_markdown;
use crate::schema::{faq_script_tag, FaqEntry};
use crate::state::{CalculatorState, Evaluation};

/// Page-level data for one calculator route.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub calculator: Calculator,
    /// Canonical route, e.g. `/calculators/log-calculator`
    pub path: String,
    pub title: String,
    pub description: String,
    pub faqs: Vec<FaqEntry>,
    /// Explanatory body in markdown
    pub body_markdown: String,
}

impl Page {
    /// Build the page for a calculator from its registry metadata
    pub fn for_calculator(calculator: Calculator) -> Page {
        let meta = calculator.metadata();
        Page {
            calculator,
            path: meta.path(),
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            faqs: faqs_for(calculator),
            body_markdown: body_markdown(&meta),
        }
    }

    /// Every page, in registry order
    pub fn all() -> Vec<Page> {
        crate::formulas::ALL_CALCULATORS
            .iter()
            .map(|&calc| Page::for_calculator(calc))
            .collect()
    }
}

// ============================================================================
// Page Content
// ============================================================================

fn body_markdown(meta: &CalculatorMetadata) -> String {
    let mut body = String::new();

    body.push_str("## How it works\n\n");
    body.push_str(&format!("{}\n\n", meta.description));
    body.push_str(&format!("Formula: `{}`\n\n", meta.formula_plain));

    body.push_str("| Input | Example |\n|---|---|\n");
    for field in &meta.inputs {
        body.push_str(&format!("| {} | {} |\n", field.label, field.placeholder));
    }
    body.push('\n');

    let note = match meta.category {
        CalculatorCategory::Trigonometry => {
            "Angles are in degrees unless the site is configured for radians."
        }
        CalculatorCategory::Integers => "Only positive whole numbers are accepted. Add as many numbers as you need.",
        CalculatorCategory::PowerUnits | CalculatorCategory::EnergyUnits => {
            "Results are rounded to the precision shown."
        }
        _ => "",
    };
    if !note.is_empty() {
        body.push_str(note);
        body.push('\n');
    }

    body
}

/// FAQ entries for a calculator page (may be empty)
pub fn faqs_for(calculator: Calculator) -> Vec<FaqEntry> {
    let pairs: &[(&str, &str)] = match calculator {
        Calculator::Sine => &[
            ("What is sine?", "In a right triangle, the sine of an angle is the opposite side divided by the hypotenuse."),
            ("What is sin(30°)?", "sin(30°) = 0.5."),
        ],
        Calculator::Cosine => &[
            ("What is cosine?", "In a right triangle, the cosine of an angle is the adjacent side divided by the hypotenuse."),
        ],
        Calculator::Tangent => &[
            ("Why is tan(90°) undefined?", "tan(θ) = sin(θ) / cos(θ), and cos(90°) = 0, so the division has no value."),
        ],
        Calculator::Arcsin => &[
            ("What is arcsin?", "Arcsin is the inverse of sine: it returns the angle whose sine is the given value."),
            ("Why must the input be between -1 and 1?", "The sine of a real angle never leaves the range [-1, 1], so no angle exists for values outside it."),
        ],
        Calculator::Arccos => &[
            ("What range does arccos return?", "Arccos returns angles from 0° to 180°."),
        ],
        Calculator::Arctan => &[
            ("Does arctan accept any number?", "Yes. The result always lies strictly between -90° and 90°."),
        ],
        Calculator::Log => &[
            ("What is a logarithm?", "log10(x) is the power you raise 10 to in order to get x. For example, log10(100) = 2."),
            ("Why can't I take the log of a negative number?", "No real power of 10 is zero or negative, so the logarithm is only defined for x > 0."),
        ],
        Calculator::NaturalLog => &[
            ("What is the natural log?", "ln(x) is the logarithm with base e ≈ 2.71828."),
        ],
        Calculator::LogBase => &[
            ("How is a log in another base computed?", "By the change-of-base rule: log_b(x) = ln(x) / ln(b)."),
            ("Why can't the base be 1?", "Every power of 1 is 1, so no exponent can produce any other number."),
        ],
        Calculator::Antilog => &[
            ("What is an antilog?", "The antilog reverses a logarithm: antilog_b(y) = b^y. The antilog of 2 in base 10 is 100."),
        ],
        Calculator::Gcf => &[
            ("What is the GCF?", "The greatest common factor is the largest whole number that divides every input without a remainder."),
            ("What is the GCF of 12 and 18?", "6."),
        ],
        Calculator::Lcm => &[
            ("What is the LCM?", "The least common multiple is the smallest whole number that every input divides evenly."),
            ("What is the LCM of 4 and 6?", "12."),
        ],
        Calculator::WattsToHorsepower | Calculator::HorsepowerToWatts => &[
            ("How many watts are in one horsepower?", "One mechanical horsepower is about 745.7 watts."),
        ],
        Calculator::JoulesToCalories | Calculator::CaloriesToJoules => &[
            ("How many joules are in a calorie?", "One thermochemical calorie is exactly 4.184 joules."),
        ],
        _ => &[],
    };

    pairs.iter().map(|(q, a)| FaqEntry::new(*q, *a)).collect()
}

// ============================================================================
// HTML Fragment
// ============================================================================

/// Render a page and its current state as an HTML fragment.
///
/// # Example
///
/// ```rust
/// use calc_core::formulas::Calculator;
/// use calc_core::pages::{render_fragment, Page};
/// use calc_core::settings::Settings;
/// use calc_core::state::CalculatorState;
///
/// let page = Page::for_calculator(Calculator::Gcf);
/// let state = CalculatorState::with_inputs(Calculator::Gcf, &["12", "18"], Settings::default());
///
/// let html = render_fragment(&page, &state);
/// assert!(html.contains("<output class=\"result\">6</output>"));
/// assert!(html.contains("application/ld+json"));
/// ```
pub fn render_fragment(page: &Page, state: &CalculatorState) -> String {
    let settings = state.settings();
    let meta = state.metadata();
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        "<nav class=\"back\"><a href=\"{}\">&larr; Back to {}</a></nav>\n",
        escape_html(&settings.site.home_path),
        escape_html(&settings.site.name)
    ));
    html.push_str(&format!(
        "<main class=\"calculator\" data-path=\"{}\">\n",
        escape_html(&page.path)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&page.title)));
    html.push_str(&format!("<p class=\"description\">{}</p>\n", escape_html(&page.description)));

    html.push_str("<dl class=\"inputs\">\n");
    for (index, text) in state.fields().iter().enumerate() {
        let Some(field) = meta.field(index) else {
            continue;
        };
        let unit = if field.is_angle {
            Some(settings.angle_unit.display_name())
        } else {
            field.unit
        };
        let label = match unit {
            Some(unit) => format!("{} ({})", field.label, unit),
            None => field.label.to_string(),
        };
        html.push_str(&format!(
            "  <dt>{}</dt><dd>{}</dd>\n",
            escape_html(&label),
            escape_html(text)
        ));
    }
    html.push_str("</dl>\n");

    match state.evaluation() {
        Evaluation::Pending => {}
        Evaluation::Ready { output } => {
            html.push_str(&format!(
                "<p>{} = <output class=\"result\">{}</output></p>\n",
                escape_html(&output.label),
                escape_html(&output.display_with_unit())
            ));
        }
        Evaluation::Invalid { message, .. } => {
            html.push_str(&format!(
                "<p class=\"error\" role=\"alert\">{}</p>\n",
                escape_html(message)
            ));
        }
    }

    html.push_str("<section class=\"body\">\n");
    html.push_str(&render_markdown(&page.body_markdown));
    html.push_str("</section>\n");

    if let Some(script) = faq_script_tag(&page.faqs) {
        html.push_str("<section class=\"faq\">\n<h2>Frequently Asked Questions</h2>\n");
        for faq in &page.faqs {
            html.push_str(&format!(
                "<details><summary>{}</summary><p>{}</p></details>\n",
                escape_html(&faq.question),
                escape_html(&faq.answer)
            ));
        }
        html.push_str(&script);
        html.push_str("\n</section>\n");
    }

    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer>{} &middot; {}</footer>\n",
        escape_html(&settings.site.name),
        escape_html(&settings.site.footer)
    ));

    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::ALL_CALCULATORS;
    use crate::settings::{AngleUnit, Settings};

    #[test]
    fn test_page_metadata_matches_registry() {
        for calc in ALL_CALCULATORS {
            let page = Page::for_calculator(*calc);
            let meta = calc.metadata();
            assert_eq!(page.path, format!("/calculators/{}", meta.slug));
            assert_eq!(page.title, meta.title);
            assert!(page.body_markdown.contains(meta.formula_plain));
        }
        assert_eq!(Page::all().len(), ALL_CALCULATORS.len());
    }

    #[test]
    fn test_faqs() {
        assert_eq!(faqs_for(Calculator::Gcf).len(), 2);
        assert!(faqs_for(Calculator::SquareRoot).is_empty());
    }

    #[test]
    fn test_fragment_with_result() {
        let page = Page::for_calculator(Calculator::Log);
        let state = CalculatorState::with_inputs(Calculator::Log, &["100"], Settings::default());
        let html = render_fragment(&page, &state);

        assert!(html.contains("<a href=\"/\">&larr; Back to Tally</a>"));
        assert!(html.contains("<h1>Log Calculator - Base 10 Logarithm</h1>"));
        assert!(html.contains("<dt>Number</dt><dd>100</dd>"));
        assert!(html.contains("<output class=\"result\">2.000000</output>"));
        assert!(html.contains("<h2>How it works</h2>"));
        assert!(html.contains("\"@type\":\"FAQPage\""));
        assert!(html.contains("<footer>Tally &middot;"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_fragment_with_error() {
        let page = Page::for_calculator(Calculator::Arcsin);
        let state = CalculatorState::with_inputs(Calculator::Arcsin, &["2"], Settings::default());
        let html = render_fragment(&page, &state);

        assert!(html.contains("<p class=\"error\" role=\"alert\">Value must be between -1 and 1.</p>"));
        assert!(!html.contains("<output"));
    }

    #[test]
    fn test_fragment_without_faqs_has_no_schema() {
        let page = Page::for_calculator(Calculator::SquareRoot);
        let state = CalculatorState::new(Calculator::SquareRoot, Settings::default());
        let html = render_fragment(&page, &state);

        assert!(!html.contains("application/ld+json"));
        assert!(!html.contains("<output"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_angle_labels_follow_settings() {
        let page = Page::for_calculator(Calculator::Sine);
        let state = CalculatorState::with_inputs(Calculator::Sine, &["30"], Settings::default());
        let html = render_fragment(&page, &state);
        assert!(html.contains("<dt>Angle (degrees)</dt><dd>30</dd>"));
    }

    #[test]
    fn test_labels_match_the_unit_the_result_used() {
        let mut radians = Settings::default();
        radians.angle_unit = AngleUnit::Radians;
        radians.site.name = "Numbers".to_string();

        let page = Page::for_calculator(Calculator::Arctan);
        let mut state = CalculatorState::with_inputs(Calculator::Arctan, &["1"], Settings::default());
        state.set_settings(radians);

        let html = render_fragment(&page, &state);
        assert!(html.contains("<dt>Value</dt><dd>1</dd>"));
        assert!(html.contains("<output class=\"result\">0.785398 rad</output>"));
        assert!(html.contains("Back to Numbers"));

        let page = Page::for_calculator(Calculator::Sine);
        let state = CalculatorState::new(Calculator::Sine, state.settings().clone());
        assert!(render_fragment(&page, &state).contains("<dt>Angle (radians)</dt>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let page = Page::for_calculator(Calculator::Log);
        let state = CalculatorState::with_inputs(Calculator::Log, &["<b>"], Settings::default());
        let html = render_fragment(&page, &state);
        assert!(html.contains("<dd>&lt;b&gt;</dd>"));
        assert!(!html.contains("<b>"));
    }
}
