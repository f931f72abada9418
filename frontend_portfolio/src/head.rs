// frontend_portfolio/src/head.rs
use gloo::console::{error, log};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::profile::AUTHOR;

/// Title and description for the document head and search results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

impl PageMeta {
    /// Title as shown in the browser tab, suffixed with the site owner.
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.title, AUTHOR.name)
    }
}

/// Writes `meta` into the live document, creating the description tag if the
/// host page does not ship one.
pub fn apply_page_meta(meta: &PageMeta) -> Result<(), JsValue> {
    let document = gloo::utils::document();
    document.set_title(&meta.document_title());

    let description = match document.query_selector(r#"meta[name="description"]"#)? {
        Some(element) => element,
        None => {
            let element = document.create_element("meta")?;
            element.set_attribute("name", "description")?;
            gloo::utils::head().append_child(&element)?;
            element
        }
    };
    description.set_attribute("content", meta.description)?;

    Ok(())
}

/// Applies `meta` once the page has mounted. Does nothing during server rendering.
#[hook]
pub fn use_page_meta(meta: &'static PageMeta) {
    use_effect_with(meta, |meta| {
        log!("Applying page metadata:", meta.title);
        if let Err(e) = apply_page_meta(meta) {
            error!(format!("Failed to apply page metadata: {:?}", e));
        }
        || ()
    });
}
