// frontend_portfolio/src/components/image.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    pub src: AttrValue,
    /// Empty for purely decorative images.
    #[prop_or_default]
    pub alt: AttrValue,
    /// Responsive `sizes` hint, e.g. `(min-width: 1024px) 32rem, 20rem`.
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    /// Above-the-fold images load eagerly; everything else is lazy.
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Image)]
pub fn image(props: &ImageProps) -> Html {
    let loading = if props.priority { "eager" } else { "lazy" };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            sizes={props.sizes.clone()}
            width={props.width.map(|w| w.to_string())}
            height={props.height.map(|h| h.to_string())}
            loading={loading}
            decoding="async"
            class={props.class.clone()}
        />
    }
}
