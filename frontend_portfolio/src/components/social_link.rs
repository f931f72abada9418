// frontend_portfolio/src/components/social_link.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    #[prop_or_default]
    pub class: Classes,
    pub href: AttrValue,
    /// Draws the icon given the classes it should carry.
    pub icon: Callback<Classes, Html>,
    pub children: Children,
}

/// One entry of the contact list: an icon followed by a labelled outbound link.
#[function_component(SocialLink)]
pub fn social_link(props: &SocialLinkProps) -> Html {
    let icon = props.icon.emit(classes!(
        "h-6",
        "w-6",
        "flex-none",
        "fill-zinc-500",
        "transition",
        "group-hover:fill-teal-500"
    ));

    html! {
        <li class={classes!(props.class.clone(), "flex")}>
            <a
                href={props.href.clone()}
                class="group flex text-sm font-medium text-zinc-800 transition hover:text-teal-500 dark:text-zinc-200 dark:hover:text-teal-500"
            >
                { icon }
                <span class="ml-4">{ for props.children.iter() }</span>
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::social_icons::github_icon;
    use yew::ServerRenderer;

    async fn render(class: &'static str) -> String {
        ServerRenderer::<SocialLink>::with_props(move || SocialLinkProps {
            class: classes!(class),
            href: "https://github.com/JoseAngel1196".into(),
            icon: Callback::from(github_icon as fn(Classes) -> Html),
            children: Children::new(vec![html! { "Follow on GitHub" }]),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn extra_classes_come_before_flex() {
        let rendered = render("mt-4").await;
        assert!(rendered.starts_with(r#"<li class="mt-4 flex">"#));
    }

    #[tokio::test]
    async fn no_extra_classes_leaves_only_flex() {
        let rendered = render("").await;
        assert!(rendered.starts_with(r#"<li class="flex">"#));
    }

    #[tokio::test]
    async fn icon_sits_inside_the_link_before_the_label() {
        let rendered = render("mt-4").await;

        let anchor = rendered.find(r#"href="https://github.com/JoseAngel1196""#).unwrap();
        let icon = rendered
            .find(r#"class="h-6 w-6 flex-none fill-zinc-500 transition group-hover:fill-teal-500""#)
            .unwrap();
        let label = rendered
            .find(r#"<span class="ml-4">Follow on GitHub</span>"#)
            .unwrap();
        assert!(anchor < icon && icon < label);
        assert!(rendered.ends_with("</a></li>"));
    }
}
