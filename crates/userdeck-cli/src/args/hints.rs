pub mod cmd {
    pub const LIST: &str = "userdeck list";
    pub const LIST_SEARCH: &str = "userdeck list --search <NAME>";
    pub const SHOW: &str = "userdeck show <CARD>";
    pub const SHOW_STEP: &str = "userdeck show <CARD> --step next";
    pub const BROWSE: &str = "userdeck browse";
    pub const EXPORT: &str = "userdeck export --output gallery.html";
    pub const CONFIG_INIT: &str = "userdeck config init";
    pub const CONFIG_SHOW: &str = "userdeck config show";
}

pub mod fmt {
    pub fn show(number: usize) -> String {
        format!("userdeck show {}", number)
    }
}
