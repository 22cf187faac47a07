use web_sys::window;

/// Storage key for the opaque scrape token. The token is forwarded to the
/// backend verbatim and never validated client-side.
const TOKEN_KEY: &str = "scrape_token";

pub fn get_stored_scrape_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .and_then(|s| s.and_then(|storage| storage.get_item(TOKEN_KEY).ok()))
        .flatten()
}

pub fn store_scrape_token(token: &str) -> Result<(), String> {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|_| "Failed to store token".to_string())?;
        }
    }
    Ok(())
}

pub fn remove_scrape_token() -> Result<(), String> {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .remove_item(TOKEN_KEY)
                .map_err(|_| "Failed to remove token".to_string())?;
        }
    }
    Ok(())
}
