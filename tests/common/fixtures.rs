use serde_json::{Value, json};

/// A heading as seen by the identifier pass.
#[derive(Debug, Clone)]
pub struct Heading {
    pub text: String,
    pub id: Option<String>,
}

pub fn heading(text: &str) -> Heading {
    Heading {
        text: text.to_string(),
        id: None,
    }
}

pub fn heading_with_id(text: &str, id: &str) -> Heading {
    Heading {
        text: text.to_string(),
        id: Some(id.to_string()),
    }
}

/// Headings of the portfolio's projects page.
pub fn projects_outline() -> Vec<Heading> {
    vec![
        heading("Projects"),
        heading("Overview"),
        heading("Rust & WebAssembly"),
        heading("Overview"),
        heading("Results"),
        heading("Overview"),
        heading("***"),
        heading("Contact"),
    ]
}

/// Navigation shared by the navbar and the sidebar.
pub fn nav_hrefs() -> Vec<&'static str> {
    vec!["home.html", "projects.html", "resume.html", "contact.html"]
}

/// A configuration object as a page would pass it to `bootWithConfig`.
pub fn custom_config() -> Value {
    json!({
        "selectors": {
            "navbar": "#top-bar",
            "clickableImages": "figure img"
        },
        "nav": { "homePage": "index.html" },
        "copyLink": { "revertAfterMs": 1500 },
        "video": { "playbackRate": 1.25 },
        "navbar": { "scrollThreshold": 80 }
    })
}
