//! Terminal texts for every supported [`Language`](crate::model::language::Language).

pub struct Messages {
    pub welcome: &'static str,
    pub cloning: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub invalid_repo: &'static str,
    pub already_exists: &'static str,
    pub location: &'static str,
    pub usage: &'static str,
    pub examples: &'static str,
    pub lang_changed: &'static str,
    pub unsupported_language: &'static str,
    pub help: HelpMessages,
}

pub struct HelpMessages {
    pub description: &'static str,
    pub repository: &'static str,
    pub lang: &'static str,
    pub dir: &'static str,
    pub command: &'static str,
}

pub static EN: Messages = Messages {
    welcome: "Welcome to GHCM - GitHub Clone Manager",
    cloning: "Cloning repository...",
    success: "Repository cloned successfully!",
    error: "Failed to clone repository",
    invalid_repo: "Invalid repository format. Use: username/repository",
    already_exists: "Directory already exists",
    location: "Location",
    usage: "Usage: ghcm <username/repository> [options]",
    examples: "Examples",
    lang_changed: "Language changed to English",
    unsupported_language: "Supported languages: en, tr",
    help: HelpMessages {
        description: "GitHub Clone Manager - A beautiful CLI tool for cloning GitHub repositories",
        repository: "Repository in format username/repository",
        lang: "Set language (en/tr)",
        dir: "Custom directory name for cloning",
        command: "Print the ghcm command for a repository or its web page and exit",
    },
};

pub static TR: Messages = Messages {
    welcome: "GHCM'ye Hoş Geldiniz - GitHub Clone Manager",
    cloning: "Depo klonlanıyor...",
    success: "Depo başarıyla klonlandı!",
    error: "Depo klonlanamadı",
    invalid_repo: "Geçersiz depo formatı. Kullanım: kullanıcıadı/depo",
    already_exists: "Dizin zaten mevcut",
    location: "Konum",
    usage: "Kullanım: ghcm <kullanıcıadı/depo> [seçenekler]",
    examples: "Örnekler",
    lang_changed: "Dil Türkçe olarak değiştirildi",
    unsupported_language: "Desteklenen diller: en, tr",
    help: HelpMessages {
        description: "GitHub Clone Manager - GitHub depolarını klonlamak için güzel bir CLI aracı",
        repository: "kullanıcıadı/depo formatında depo",
        lang: "Dil ayarla (en/tr)",
        dir: "Klonlama için özel dizin adı",
        command: "Bir depo veya sayfası için ghcm komutunu yazdır ve çık",
    },
};

/// Example invocations shown under the usage line.
pub const EXAMPLES: [&str; 5] = [
    "ghcm Beratkan15/GHCM",
    "ghcm microsoft/vscode -d my-vscode",
    "ghcm -c https://github.com/microsoft/vscode/tree/main",
    "ghcm -l tr  # Change language to Turkish",
    "ghcm -l en  # Change language to English",
];
