//! Internationalization (i18n) support for `shams-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/shams-ui.ftl   (fallback/reference)
//!   ar/shams-ui.ftl
//!   ku/shams-ui.ftl   (Sorani)
//!   fa/shams-ui.ftl
//!   tr/shams-ui.ftl
//! ```
//!
//! The active language is process-wide. Components read it through
//! [`use_language`], which also subscribes them to changes; [`LanguageState::set_language`]
//! is the single write path (loader switch, signal update, persistence).
//!
//! Public API surface:
//! - `init()` – load the fallback bundle (safe to call multiple times).
//! - `set_language(code)` – switch the global loader.
//! - `tr(key)` – dynamic lookup that falls back to the key itself.
//! - `t!` – literal lookup checked against the fallback file at compile time.
//! - `LanguageProvider` / `use_language()` – reactive language context.
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::language::LanguageCode;
use crate::core::storage;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("header-home")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
pub(crate) const DOMAIN: &str = "shams-ui";

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported language `{0}`")]
    UnknownLanguage(String),
    #[error("failed to load translations: {0}")]
    Load(#[from] i18n_embed::I18nEmbedError),
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, LanguageCode::default().langid())
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Loads the fallback bundle only; the
/// provider selects the visitor's language afterwards.
pub fn init() {
    INIT.call_once(|| {
        let fallback = [LanguageCode::default().langid()];
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &fallback) {
            tracing::warn!("[i18n] failed loading fallback bundle ({err})");
        }
    });
}

/// Switch the global loader to `code`.
pub fn set_language(code: LanguageCode) -> Result<(), LocaleError> {
    init();
    i18n_embed::select(&*LOADER, &Localizations, &[code.langid()])?;
    Ok(())
}

/// Lookup for keys only known at runtime. A missing message yields the key.
pub fn tr(key: &str) -> String {
    lookup(&LOADER, key)
}

pub(crate) fn lookup(loader: &FluentLanguageLoader, key: &str) -> String {
    if loader.has(key) {
        loader.get(key)
    } else {
        key.to_string()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language for a fresh page load: saved choice, then browser/OS preference, then English.
pub fn initial_language() -> LanguageCode {
    storage::load_language()
        .or_else(|| LanguageCode::negotiate(&requested_languages()))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Handle to the process-wide active language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageState {
    active: Signal<LanguageCode>,
}

impl LanguageState {
    /// Current language; subscribes the calling component.
    pub fn language(&self) -> LanguageCode {
        (self.active)()
    }

    pub fn set_language(&mut self, code: LanguageCode) {
        if let Err(err) = set_language(code) {
            tracing::warn!("[i18n] keeping previous language, cannot select {code}: {err}");
            return;
        }
        tracing::info!("[i18n] language -> {code}");
        self.active.set(code);
        if let Err(err) = storage::save_language(code) {
            tracing::warn!("[i18n] language choice not persisted: {err}");
        }
    }
}

/// Owns the active language for everything below it and sets `lang`/`dir`
/// on a wrapping element.
///
/// `initial` pins the first language (server-side rendering of a known
/// locale); otherwise [`initial_language`] decides.
#[component]
pub fn LanguageProvider(initial: Option<LanguageCode>, children: Element) -> Element {
    let state = use_context_provider(|| {
        init();
        let code = initial.unwrap_or_else(initial_language);
        if let Err(err) = set_language(code) {
            tracing::warn!("[i18n] falling back to {}: {err}", LanguageCode::default());
        }
        LanguageState {
            active: Signal::new(code),
        }
    });
    let code = state.language();

    rsx! {
        div { lang: "{code}", dir: code.direction().as_attr(), {children} }
    }
}

/// Active language from the nearest [`LanguageProvider`].
///
/// A provider is required for a shared language. Without one the calling
/// component gets its own English state, disconnected from every other
/// component; the warning is logged once per component.
pub fn use_language() -> LanguageState {
    if let Some(state) = try_use_context::<LanguageState>() {
        return state;
    }

    use_hook(|| {
        tracing::warn!("[i18n] no LanguageProvider above this component; using local state");
        LanguageState {
            active: Signal::new(LanguageCode::default()),
        }
    })
}
