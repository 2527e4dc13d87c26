/// All localized user-facing strings for a language
///
/// Strings are stored raw; the page shell escapes them when rendering HTML.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Page Header ====================
    /// Main heading of the console page
    pub app_title: &'static str,

    /// Line shown under the heading
    pub app_subtitle: &'static str,

    // ==================== Language Switcher ====================
    /// Label of the language selector
    pub language_label: &'static str,

    /// Shown next to the selector
    /// Placeholders: {language}
    pub current_language: &'static str,

    // ==================== Network Tabs ====================
    /// Label of the first network tab (direct connection)
    pub tab_direct: &'static str,

    /// Label of the second network tab (connection through the CORS proxy)
    pub tab_proxy: &'static str,

    /// Text rendered where the connection form is mounted
    pub connection_form_placeholder: &'static str,
}

impl LanguageStrings {
    /// Labels of the network tabs, in tab index order
    pub fn tab_labels(&self) -> [&'static str; 2] {
        [self.tab_direct, self.tab_proxy]
    }
}

// ==================== English Strings ====================

/// English language strings (default)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    app_title: "Active Directory Management Console",
    app_subtitle: "Connect to a domain controller to manage users, groups and computers",

    language_label: "Language",
    current_language: "Current language: {language}",

    tab_direct: "Direct connection",
    tab_proxy: "Through proxy",
    connection_form_placeholder: "Connection form",
};

// ==================== Nepali Strings ====================

/// Nepali language strings
pub const NEPALI_STRINGS: LanguageStrings = LanguageStrings {
    app_title: "एक्टिभ डाइरेक्टरी व्यवस्थापन कन्सोल",
    app_subtitle: "प्रयोगकर्ता, समूह र कम्प्युटर व्यवस्थापन गर्न डोमेन नियन्त्रकमा जडान गर्नुहोस्",

    language_label: "भाषा",
    current_language: "हालको भाषा: {language}",

    tab_direct: "प्रत्यक्ष जडान",
    tab_proxy: "प्रोक्सी मार्फत",
    connection_form_placeholder: "जडान फारम",
};
