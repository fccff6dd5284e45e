use super::*;

pub(crate) fn card_class(size: CardSize, class_name: Option<&str>) -> String {
    ClassList::new("moon-card").axis(size).build(class_name)
}

#[component]
/// Card container. Compose [`CardHeader`], [`CardContent`], and [`CardFooter`] inside it.
pub fn Card(
    #[prop(optional, into)] size: CardSize,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=card_class(size, class_name.as_deref())
            data-slot="card"
            data-size=size.token()
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card header. `title`, `description`, and `action` render ahead of free children.
pub fn CardHeader(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] title: Option<ViewFn>,
    #[prop(optional, into)] description: Option<ViewFn>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-card-header", class_name.as_deref()) data-slot="card-header">
            {title.map(|title| view! { <CardTitle>{title.run()}</CardTitle> })}
            {description.map(|description| view! { <CardDescription>{description.run()}</CardDescription> })}
            {action.map(|action| view! { <CardAction>{action.run()}</CardAction> })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card heading.
pub fn CardTitle(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-card-title", class_name.as_deref()) data-slot="card-title">
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Secondary copy under the title.
pub fn CardDescription(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=slot_class("moon-card-description", class_name.as_deref())
            data-slot="card-description"
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Header-aligned action region.
pub fn CardAction(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-card-action", class_name.as_deref()) data-slot="card-action">
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Main card body.
pub fn CardContent(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-card-content", class_name.as_deref()) data-slot="card-content">
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card footer.
pub fn CardFooter(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-card-footer", class_name.as_deref()) data-slot="card-footer">
            {children.map(|children| children())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::primitives::markup::{after_opening_tag, opening_tag, render};

    #[test]
    fn empty_card_parts_render_bare_roots() {
        let html = render(|| {
            view! {
                <Card size="sm"/>
                <CardHeader/>
                <CardContent/>
                <CardFooter/>
            }
        });
        for slot in ["card", "card-header", "card-content", "card-footer"] {
            let marker = format!(r#"data-slot="{slot}""#);
            assert!(
                after_opening_tag(&html, &marker).starts_with("</div>"),
                "{slot} root should be empty in {html}"
            );
        }
        assert!(opening_tag(&html, r#"data-slot="card""#).contains(r#"data-size="sm""#));
    }

    #[test]
    fn header_slots_precede_children() {
        let html = render(|| {
            view! {
                <CardHeader title=|| "Login" description=|| "Enter your email">
                    <span data-extra="true">"extra"</span>
                </CardHeader>
            }
        });
        let title = html.find(r#"data-slot="card-title""#).expect("title");
        let description = html.find(r#"data-slot="card-description""#).expect("description");
        let extra = html.find(r#"data-extra="true""#).expect("children");
        assert!(title < description && description < extra);
    }

    #[test]
    fn card_defaults_to_regular_size() {
        assert_eq!(
            card_class(CardSize::default(), None),
            "moon-card moon-card--size-default"
        );
    }

    #[test]
    fn small_card_keeps_layout_overrides() {
        assert_eq!(
            card_class(CardSize::from("sm"), Some("mx-auto w-full max-w-sm")),
            "moon-card moon-card--size-sm mx-auto w-full max-w-sm"
        );
    }

    #[test]
    fn unknown_size_falls_back() {
        assert_eq!(CardSize::from("xl"), CardSize::Default);
    }
}
