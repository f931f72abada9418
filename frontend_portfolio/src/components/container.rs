// frontend_portfolio/src/components/container.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Full-width wrapper capping the content at the site's widest breakpoint.
#[function_component(ContainerOuter)]
pub fn container_outer(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("sm:px-8", props.class.clone())}>
            <div class="mx-auto w-full max-w-7xl lg:px-8">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Narrower reading column nested inside [`ContainerOuter`].
#[function_component(ContainerInner)]
pub fn container_inner(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("relative", "px-4", "sm:px-8", "lg:px-12", props.class.clone())}>
            <div class="mx-auto max-w-2xl lg:max-w-5xl">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <ContainerOuter class={props.class.clone()}>
            <ContainerInner>
                { for props.children.iter() }
            </ContainerInner>
        </ContainerOuter>
    }
}
