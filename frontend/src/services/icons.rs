//! Service name → icon URL resolution.
//!
//! Known services map to CDN logos; anything else gets a deterministic
//! generated-avatar URL so the resolver never fails. Image-load failures are a
//! rendering concern handled by `ServiceIcon`, not here.

/// Background color of generated fallback avatars (brand purple, no '#').
const FALLBACK_BACKGROUND: &str = "7B61FF";

/// Exact, case-sensitive lookup table for known services.
fn lookup(name: &str) -> Option<&'static str> {
    let url = match name {
        // Dashboard
        "Netflix" => "https://cdn.simpleicons.org/netflix",
        "ChatGPT Plus" => "https://cdn.simpleicons.org/openai/ffffff",
        "Notion" => "https://cdn.simpleicons.org/notion/ffffff",
        "Adobe CC" => "https://cdn.simpleicons.org/adobe",
        "Duolingo Plus" => "https://cdn.simpleicons.org/duolingo",

        // B2B
        "Figma" => "https://cdn.simpleicons.org/figma",
        "Slack Pro" => "https://cdn.simpleicons.org/slack",

        // Family
        "Spotify" => "https://cdn.simpleicons.org/spotify",
        "YouTube Premium" => "https://cdn.simpleicons.org/youtube",
        "Apple One" => "https://cdn.simpleicons.org/apple/ffffff",

        // Marketplace
        "Canva Pro" => "https://cdn.simpleicons.org/canva",
        "Okko" => "https://logo.clearbit.com/okko.tv",
        "Yandex Music" => "https://logo.clearbit.com/music.yandex.ru",

        _ => return None,
    };
    Some(url)
}

/// Resolves a service display name to an image URL. Always succeeds.
pub fn resolve(name: &str) -> String {
    match lookup(name) {
        Some(url) => url.to_string(),
        None => {
            let encoded = js_sys::encode_uri_component(name);
            format!(
                "https://ui-avatars.com/api/?name={}&background={}&color=fff&size=64&bold=true&format=svg",
                String::from(encoded),
                FALLBACK_BACKGROUND
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        assert_eq!(lookup("Spotify"), Some("https://cdn.simpleicons.org/spotify"));
        assert_eq!(lookup("spotify"), None);
        assert_eq!(lookup("Spotify "), None);
        assert_eq!(lookup("Моя студия"), None);
    }
}

// URL-encoding of the fallback goes through js, so these only run on wasm
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_known_service_exact_match() {
        assert_eq!(resolve("Spotify"), "https://cdn.simpleicons.org/spotify");
        // Case-sensitive: lowercase misses the table and falls back
        assert!(resolve("spotify").starts_with("https://ui-avatars.com/api/"));
    }

    #[wasm_bindgen_test]
    fn test_unknown_service_gets_generated_avatar() {
        let url = resolve("Моя студия");
        assert!(url.starts_with("https://ui-avatars.com/api/?name="));
        assert!(url.contains("background=7B61FF"));
        // URL-encoded, no raw spaces
        assert!(!url.contains(' '));
    }
}
