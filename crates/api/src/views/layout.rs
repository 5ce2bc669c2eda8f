use maud::{html, Markup, DOCTYPE};

/// Minimal document shell around a page fragment.
///
/// Headers, footers and styling belong to the surrounding site, not here.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                main { (body) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_fragment_in_document() {
        let out = page("Products", html! { p { "hola" } }).into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Products</title>"));
        assert!(out.contains("<main><p>hola</p></main>"));
    }
}
