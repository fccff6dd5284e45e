use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Host element a [`Button`] renders as.
pub enum ButtonHost {
    /// Native `<button type="button">`.
    Button,
    /// Anchor styled as a button.
    Anchor {
        /// Link target.
        href: String,
        /// Optional browsing context (`_blank`).
        target: Option<String>,
    },
}

impl Default for ButtonHost {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonHost {
    /// Anchor host without a browsing-context override.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::Anchor {
            href: href.into(),
            target: None,
        }
    }
}

pub(crate) fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    class_name: Option<&str>,
) -> String {
    ClassList::new("moon-button")
        .axis(variant)
        .axis(size)
        .build(class_name)
}

#[component]
/// Action button with variant/size styling, optional icon slots, and an anchor host mode.
///
/// A disabled button never forwards clicks to `on_click`, whichever host it
/// renders as.
pub fn Button(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] size: ButtonSize,
    #[prop(optional)] as_host: ButtonHost,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] leading_icon: Option<ViewFn>,
    #[prop(optional, into)] trailing_icon: Option<ViewFn>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = button_class(variant, size, class_name.as_deref());
    let content = view! {
        <>
        {leading_icon.map(|icon| view! { <span data-icon="inline-start">{icon.run()}</span> })}
        {children.map(|children| children())}
        {trailing_icon.map(|icon| view! { <span data-icon="inline-end">{icon.run()}</span> })}
        </>
    };

    match as_host {
        ButtonHost::Button => view! {
            <button
                type=button_type.unwrap_or("button")
                class=class
                aria-label=aria_label
                title=title
                disabled=move || disabled.get()
                data-slot="button"
                data-variant=variant.token()
                data-size=size.token()
                data-disabled=move || bool_token(disabled.get())
                on:click=guarded_click(disabled, false, on_click)
            >
                {content}
            </button>
        }
        .into_view(),
        ButtonHost::Anchor { href, target } => view! {
            <a
                href=href
                target=target
                class=class
                aria-label=aria_label
                title=title
                aria-disabled=move || disabled.get().then_some("true")
                tabindex=move || disabled.get().then_some("-1")
                data-slot="button"
                data-variant=variant.token()
                data-size=size.token()
                data-disabled=move || bool_token(disabled.get())
                on:click=guarded_click(disabled, true, on_click)
            >
                {content}
            </a>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::primitives::markup::{after_opening_tag, opening_tag, render};

    #[test]
    fn default_button_resolves_default_axes() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), None),
            "moon-button moon-button--default moon-button--size-default"
        );
    }

    #[test]
    fn every_size_token_appears_in_class() {
        for size in ButtonSize::ALL {
            let classes = button_class(ButtonVariant::Outline, *size, None);
            assert!(classes.ends_with(&format!("--size-{}", size.token())));
        }
    }

    #[test]
    fn anchor_host_helper_builds_plain_link() {
        assert_eq!(
            ButtonHost::anchor("/login"),
            ButtonHost::Anchor {
                href: "/login".to_string(),
                target: None,
            }
        );
        assert_eq!(ButtonHost::default(), ButtonHost::Button);
    }

    #[test]
    fn button_without_children_renders_empty_root() {
        let html = render(|| view! { <Button/> });
        let tag = opening_tag(&html, r#"data-slot="button""#);
        assert!(tag.starts_with("<button"));
        assert!(tag.contains(r#"type="button""#));
        assert!(after_opening_tag(&html, r#"data-slot="button""#).starts_with("</button>"));
    }

    #[test]
    fn disabled_button_renders_disabled_state() {
        let _ = leptos::create_runtime();
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let on_click = Callback::new(move |_: MouseEvent| counter.set(counter.get() + 1));

        let html = render(move || {
            view! { <Button disabled=true on_click=on_click>"Save"</Button> }
        });
        let tag = opening_tag(&html, r#"data-slot="button""#);
        assert!(tag.contains(" disabled"));
        assert!(tag.contains(r#"data-disabled="true""#));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn disabled_anchor_host_leaves_tab_order() {
        let html = render(|| {
            view! {
                <Button as_host=ButtonHost::anchor("/login") disabled=true>
                    "Login"
                </Button>
            }
        });
        let tag = opening_tag(&html, r#"data-slot="button""#);
        assert!(tag.starts_with("<a"));
        assert!(tag.contains(r#"href="/login""#));
        assert!(tag.contains(r#"aria-disabled="true""#));
        assert!(tag.contains(r#"tabindex="-1""#));
        assert!(tag.contains(r#"data-disabled="true""#));
    }

    #[test]
    fn enabled_anchor_host_stays_focusable() {
        let html = render(|| view! { <Button as_host=ButtonHost::anchor("/login")>"Login"</Button> });
        let tag = opening_tag(&html, r#"data-slot="button""#);
        assert!(!tag.contains("aria-disabled"));
        assert!(!tag.contains("tabindex"));
        assert!(tag.contains(r#"data-disabled="false""#));
    }

    #[test]
    fn icon_slots_wrap_children() {
        let html = render(|| {
            view! {
                <Button leading_icon=|| "+" trailing_icon=|| ">">"New"</Button>
            }
        });
        let start = html.find(r#"data-icon="inline-start""#).expect("leading icon");
        let label = html.find("New").expect("label");
        let end = html.find(r#"data-icon="inline-end""#).expect("trailing icon");
        assert!(start < label && label < end);
    }
}
