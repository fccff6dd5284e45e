use super::*;

pub(crate) fn badge_class(variant: BadgeVariant, class_name: Option<&str>) -> String {
    ClassList::new("moon-badge").axis(variant).build(class_name)
}

#[component]
/// Compact label. With `href` set the badge renders as an anchor and keeps its styling.
pub fn Badge(
    #[prop(optional, into)] variant: BadgeVariant,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = badge_class(variant, class_name.as_deref());
    let content = children.map(|children| children());

    match href {
        Some(href) => view! {
            <a class=class href=href data-slot="badge" data-variant=variant.token()>
                {content}
            </a>
        }
        .into_view(),
        None => view! {
            <span class=class data-slot="badge" data-variant=variant.token()>
                {content}
            </span>
        }
        .into_view(),
    }
}
