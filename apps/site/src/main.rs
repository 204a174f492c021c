#![windows_subsystem = "windows"]

use folio::domain::config::SiteConfig;
use folio::locale::LocaleStore;
use folio::logger::Logger;
use folio::prefs::Prefs;
use folio_site::DesktopShell;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let config = SiteConfig::from_env();

    // The webview has its own event loop; this runtime exists for the
    // preference engine and stays alive for the whole session so the store
    // can keep persisting on it.
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let store = runtime.block_on(build_store(&config));

    DesktopShell::new()
        .with_title(&config.window.title)
        .with_size(config.window.width, config.window.height)
        .launch(store, folio::ui::App);

    drop(runtime);
    Ok(())
}

/// Connects the preference engine and wraps it in a locale store.
///
/// A root that cannot be opened degrades to an in-memory store: the site
/// still runs, the language choice just will not survive a restart.
async fn build_store(config: &SiteConfig) -> LocaleStore {
    match Prefs::builder().root(&config.prefs.data_dir).connect().await {
        Ok(prefs) => LocaleStore::new(prefs),
        Err(err) => {
            warn!(error = %err, "Preference storage unavailable, language will not persist");
            LocaleStore::detached()
        },
    }
}
