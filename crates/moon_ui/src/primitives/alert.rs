use super::*;

pub(crate) fn alert_class(variant: AlertVariant, class_name: Option<&str>) -> String {
    ClassList::new("moon-alert").axis(variant).build(class_name)
}

#[component]
/// Callout surface with optional icon, title, description, and action slots.
///
/// Slots passed as props render in a fixed order (icon, title, description,
/// action) ahead of any free children. Callers can instead compose
/// [`AlertTitle`], [`AlertDescription`], and [`AlertAction`] as children.
pub fn Alert(
    #[prop(optional, into)] variant: AlertVariant,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional, into)] title: Option<ViewFn>,
    #[prop(optional, into)] description: Option<ViewFn>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=alert_class(variant, class_name.as_deref())
            role="alert"
            data-slot="alert"
            data-variant=variant.token()
        >
            {icon.map(|icon| view! { <span class="moon-alert-icon" data-slot="alert-icon">{icon.run()}</span> })}
            {title.map(|title| view! { <AlertTitle>{title.run()}</AlertTitle> })}
            {description.map(|description| view! { <AlertDescription>{description.run()}</AlertDescription> })}
            {action.map(|action| view! { <AlertAction>{action.run()}</AlertAction> })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Alert heading slot.
pub fn AlertTitle(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-alert-title", class_name.as_deref()) data-slot="alert-title">
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Alert body copy slot.
pub fn AlertDescription(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=slot_class("moon-alert-description", class_name.as_deref())
            data-slot="alert-description"
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Trailing action region, typically holding a [`Button`](crate::Button).
pub fn AlertAction(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=slot_class("moon-alert-action", class_name.as_deref()) data-slot="alert-action">
            {children.map(|children| children())}
        </div>
    }
}
