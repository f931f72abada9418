// frontend_portfolio/src/pages/about.rs
use gloo::console::error;
use yew::prelude::*;

use crate::components::{container::Container, image::Image, social_link::SocialLink};
use crate::head::{use_page_meta, PageMeta};
use crate::profile::{Person, PORTRAIT, SOCIAL_LINKS};

pub const METADATA: PageMeta = PageMeta {
    title: "About",
    description: "I’m Jose Hidalgo. I live in New York City, where I help companies build scalable and resilient systems.",
};

#[function_component(About)]
pub fn about() -> Html {
    use_page_meta(&METADATA);

    let json_ld = match Person::from_profile().to_json_ld() {
        Ok(json) => html! { <script type="application/ld+json">{ json }</script> },
        Err(e) => {
            error!(format!("Failed to serialize profile: {}", e));
            html! {}
        }
    };

    html! {
        <Container class={classes!("mt-16", "sm:mt-32")}>
            { json_ld }
            <div class="grid grid-cols-1 gap-y-16 lg:grid-cols-2 lg:grid-rows-[auto_1fr] lg:gap-y-12">
                <div class="lg:pl-20">
                    <div class="max-w-xs px-2.5 lg:max-w-none">
                        <Image
                            src={PORTRAIT.src}
                            alt={PORTRAIT.alt}
                            sizes={PORTRAIT.sizes}
                            width={PORTRAIT.width}
                            height={PORTRAIT.height}
                            priority={true}
                            class="aspect-square rotate-3 rounded-2xl bg-zinc-100 object-cover dark:bg-zinc-800"
                        />
                    </div>
                </div>
                <div class="lg:order-first lg:row-span-2">
                    <h1 class="text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                        { "I'm Jose Hidalgo. I live in New York City and I help companies build scalable and resilient systems." }
                    </h1>
                    <div class="mt-6 space-y-7 text-base text-zinc-600 dark:text-zinc-400">
                        { biography() }
                    </div>
                </div>
                <div class="lg:pl-20">
                    <ul role="list">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <SocialLink
                                href={link.href}
                                icon={Callback::from(link.icon)}
                                class={link.class}
                            >
                                { link.label }
                            </SocialLink>
                        }) }
                    </ul>
                </div>
            </div>
        </Container>
    }
}

fn outbound(href: &'static str, text: &'static str) -> Html {
    html! {
        <a {href} target="_blank" rel="noopener noreferrer">{ text }</a>
    }
}

fn biography() -> Html {
    html! {
        <>
            <p>
                { "Like any other software engineer's story, I’m not someone who found their love for coding \
                   during high school or built my first app when I was a kid. My journey to software began when \
                   I was working as a technical support engineer back in 2017 (fun fact: my first job in \
                   Engineering). I was still in my sixth semester at " }
                { outbound("https://unapec.edu.do/", "university") }
                { " and six months from graduation." }
            </p>
            <p>
                { "During my first experience in the IT world, I met a senior engineer who was working in the \
                   same company but in the development team. He introduced me to the world of software, and I \
                   instantly fell in love. In the following days, I invested my free time in building side \
                   projects. These were very beginner projects like CRUD apps, how to connect to a DB, etc. They \
                   were probably not the best projects, but helped me a lot to get a general idea of how to build \
                   software. I spent almost a month building projects until I found a job posting from this " }
                { outbound("https://www.linkedin.com/company/contraloriard/", "public institution") }
                { " looking for a software engineer. TL;DR: I applied and got the job, yay! 😃 And that’s how I \
                   landed my first software engineering job." }
            </p>
            <p>
                { "Two and a half years passed, and it got to a point where I wanted to find more challenging \
                   projects. I had always dreamed of working at a company in the USA. While trying to enter the \
                   US market, I found a part-time role at an agency in Miami. They had partnerships with multiple \
                   small companies across the country and were helping them build internal apps for their \
                   clients. I had the opportunity to talk with customers, discuss their problems, and then go \
                   back to the team to design solutions." }
            </p>
            <p>
                { "In March 2020, I met Pinwheel, and it changed my life. I joined as one of the first engineers \
                   and learned what it takes to build a company from the ground up. I helped build most of the \
                   services that power the company today. Before Pinwheel, I had some experience in the software \
                   world, but Pinwheel really matured me. During my time at Pinwheel, I’ve met awesome engineers \
                   who have taught me how to build scalable systems and how to grow in my career as a software \
                   engineer." }
            </p>
            <p>
                { "I hope that by reading this, you got an idea of a little bit about me. If you want to hear \
                   more about me or want to work with me, don’t hesitate to reach out." }
            </p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render() -> String {
        ServerRenderer::<About>::new().hydratable(false).render().await
    }

    fn list_items(rendered: &str) -> Vec<&str> {
        rendered
            .split("<li ")
            .skip(1)
            .map(|item| &item[..item.find("</li>").unwrap()])
            .collect()
    }

    #[test]
    fn metadata_title_is_about() {
        assert_eq!(METADATA.title, "About");
        assert!(METADATA.description.contains("Jose Hidalgo"));
    }

    #[tokio::test]
    async fn renders_exactly_three_social_links() {
        let rendered = render().await;
        let items = list_items(&rendered);

        assert_eq!(items.len(), 3);
        assert!(items[0].contains("Follow on GitHub"));
        assert!(items[1].contains("Follow on LinkedIn"));
        assert!(items[2].contains("joseangel1196@hotmail.com"));
    }

    #[tokio::test]
    async fn each_social_link_targets_its_url() {
        let rendered = render().await;
        let items = list_items(&rendered);

        assert!(items[0].contains(r#"href="https://github.com/JoseAngel1196""#));
        assert!(items[1].contains(r#"href="https://www.linkedin.com/in/jose-hidalgo-rosa""#));
        assert!(items[2].contains(r#"href="mailto:joseangel1196@hotmail.com""#));
        assert!(items[2].starts_with(r#"class="mt-8 border-t border-zinc-100 pt-8 dark:border-zinc-700/40 flex""#));
    }

    #[tokio::test]
    async fn bio_links_open_in_new_tab() {
        let rendered = render().await;

        assert!(rendered.contains(
            r#"<a href="https://unapec.edu.do/" target="_blank" rel="noopener noreferrer">university</a>"#
        ));
        assert!(rendered.contains(r#"href="https://www.linkedin.com/company/contraloriard/""#));
    }

    #[tokio::test]
    async fn renders_portrait_and_structured_data() {
        let rendered = render().await;

        assert!(rendered.contains(r#"src="static/img/portrait.png""#));
        assert!(rendered.contains(r#"loading="eager""#));
        assert!(rendered.contains(r#"<script type="application/ld+json">"#));
        assert_eq!(rendered.matches("<p>").count(), 5);
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        assert_eq!(render().await, render().await);
    }
}
