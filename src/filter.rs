use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::{debug, info};

/// Arabic character class used by default: the letter forms (hamza carriers
/// included), the harakat/tanwin marks plus shadda and sukun, tatweel, and
/// the Arabic-Indic digits. Matches the OpenITI corpus conventions.
const ARABIC_SCRIPT_CHARS: &str =
    "ءآأؤإئابةتثجحخدذرزسشصضطظعغفقكلمنهوىيًٌٍَُِّْـ٠١٢٣٤٥٦٧٨٩";

/// Configuration for script-run extraction
#[derive(Debug, Clone)]
pub struct FilterRules {
    /// Characters treated as in-script token content
    pub script_chars: String,
    /// Reserved sentence-boundary marker character
    pub marker: char,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            script_chars: ARABIC_SCRIPT_CHARS.to_string(),
            marker: '#',
        }
    }
}

/// Extracts maximal runs of in-script characters and boundary markers,
/// in source order, discarding everything else.
pub struct ScriptFilter {
    regex: Regex,
}

impl ScriptFilter {
    /// Compile the character-class pattern for the given rules.
    pub fn new(rules: FilterRules) -> Result<Self> {
        // Alternation order matters: the marker branch must not be shadowed
        // by the class, so the marker is excluded from script_chars by contract.
        let pattern = format!("[{}]+|{}+", rules.script_chars, rules.marker);
        debug!("Compiling script filter pattern ({} chars in class)", rules.script_chars.chars().count());

        let regex = Regex::new(&pattern)?;
        info!("Script filter compiled");

        Ok(Self { regex })
    }

    /// Create a filter with the default Arabic rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(FilterRules::default())
    }

    /// Scan the body text left to right and return every maximal run that is
    /// either entirely in-script or entirely boundary markers. Excluded
    /// characters contribute nothing and never merge the runs they separate.
    /// Total: any input (including empty) yields a well-formed run list.
    pub fn filter_script(&self, body: &str) -> Vec<String> {
        self.regex
            .find_iter(body)
            .map(|m| body[m.range()].to_string())
            .collect()
    }
}
