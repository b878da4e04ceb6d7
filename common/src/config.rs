use std::path::PathBuf;

pub struct Config {
    /// Path to the IEEE `oui.txt` export used for vendor lookups.
    ///
    /// Without it, reports skip the vendor section.
    pub oui_file: Option<PathBuf>,
    /// 0 prints everything, 1 drops headers, 2 prints only the bare results.
    pub quiet: u8,
}
