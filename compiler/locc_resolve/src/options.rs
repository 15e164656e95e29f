use locc_ir::POOL_BUDGET;

/// Settings for one compilation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Language the display names are written in.
    pub display_language: String,
    /// Source stems to compile (`fr`, `es_ES`, `zh_Hant_TW`); empty means
    /// every document in the input tree.
    pub locales: Vec<String>,
    /// Byte budget of each string pool.
    pub pool_budget: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            display_language: "en".to_string(),
            locales: Vec::new(),
            pool_budget: POOL_BUDGET,
        }
    }
}
