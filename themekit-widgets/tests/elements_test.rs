use themekit_core::capability::CapabilityKind;
use themekit_core::host::{HostCall, RecordingHost, ThemeHost};
use themekit_core::inspect::Inspectable;
use themekit_core::template::ElementTemplate;
use themekit_core::themeable::Themeable;
use themekit_theme::style::{ColourStyle, TextStyle};
use themekit_theme::theme::Theme;
use themekit_theme::vendor::{ThemeVariant, ThemeVendor};
use themekit_widgets::bar_button_item::BarButtonItem;
use themekit_widgets::button::Button;
use themekit_widgets::label::Label;
use themekit_widgets::navigation_bar::NavigationBar;
use themekit_widgets::slider::Slider;
use themekit_widgets::view::View;

#[test]
fn test_elements_declare_their_capabilities() {
    let vendor = ThemeVendor::new();
    let host = RecordingHost::new;

    assert_eq!(
        View::new(host(), vendor.clone()).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Background]
    );
    assert_eq!(
        Label::new(host(), vendor.clone()).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Background, CapabilityKind::Text]
    );
    assert_eq!(
        Button::new(host(), vendor.clone()).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Background, CapabilityKind::Tint, CapabilityKind::Text]
    );
    assert_eq!(
        Slider::new(host(), vendor.clone()).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Tint, CapabilityKind::ThumbTint]
    );
    assert_eq!(
        NavigationBar::new(host(), vendor.clone()).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Tint, CapabilityKind::Text, CapabilityKind::Bar]
    );
    assert_eq!(
        BarButtonItem::new(host(), vendor).theme_state().capabilities().kinds(),
        vec![CapabilityKind::Tint, CapabilityKind::Text]
    );
}

#[test]
fn test_button_applies_in_capability_order() {
    let theme = Theme::light();
    let mut button = Button::new(RecordingHost::new(), ThemeVendor::with_builtin_themes()).with_title("OK");

    button.set_text_style(Some(TextStyle::Headline));
    button.set_tint_colour_style(Some(ColourStyle::Tint));
    button.set_background_colour_style(Some(ColourStyle::Primary));
    button.host_mut().take_calls();

    button.on_layout();

    assert_eq!(
        button.host().calls(),
        &[
            HostCall::BackgroundColour(theme.colour(ColourStyle::Primary).unwrap()),
            HostCall::TintColour(theme.colour(ColourStyle::Tint).unwrap()),
            HostCall::TextAttributes(theme.text_attributes(TextStyle::Headline).unwrap().clone()),
        ]
    );
    assert_eq!(button.title(), "OK");
}

#[test]
fn test_slider_never_touches_background() {
    let mut slider = Slider::new(RecordingHost::new(), ThemeVendor::with_builtin_themes());
    slider.set_thumb_tint_colour_style(Some(ColourStyle::Accent));
    slider.on_layout();

    assert_eq!(slider.host().background_colour(), None);
    assert_eq!(
        slider.host().thumb_tint_colour(),
        Theme::light().colour(ColourStyle::Accent)
    );
}

#[test]
fn test_navigation_bar_title_colour_overrides_text_style() {
    let theme = Theme::dark();
    let vendor = ThemeVendor::with_builtin_themes();
    vendor.switch_theme(&ThemeVariant::Dark);

    let mut bar = NavigationBar::new(RecordingHost::new(), vendor);
    bar.set_bar_tint_colour_style_id(Some("secondaryBackground"));
    bar.set_text_style_id(Some("headline"));
    bar.set_text_colour_style_id(Some("accent"));
    bar.on_layout();

    let attributes = bar.host().text_attributes().unwrap();
    assert_eq!(attributes.size, theme.text_attributes(TextStyle::Headline).unwrap().size);
    assert_eq!(attributes.colour, theme.colour(ColourStyle::Accent));
    assert_eq!(
        bar.host().bar_tint_colour(),
        theme.colour(ColourStyle::SecondaryBackground)
    );
}

#[test]
fn test_bar_button_item_applies_immediately() {
    let mut item = BarButtonItem::new(RecordingHost::new(), ThemeVendor::with_builtin_themes());
    item.update_theme_if_needed();

    assert!(item.set_tint_colour_style(Some(ColourStyle::Accent)));

    assert!(!item.needs_update_theme());
    assert_eq!(item.host().layout_requests(), 0);
    assert_eq!(item.host().tint_colour(), Theme::light().colour(ColourStyle::Accent));
}

#[test]
fn test_label_from_template() {
    let template = ElementTemplate::from_toml(
        r#"
        kind = "Label"

        [properties]
        backgroundColourStyleId = "background"
        textStyleId = "caption"
        textColourStyleId = ""
        "#,
    )
    .unwrap();

    let mut label = Label::from_template(RecordingHost::new(), ThemeVendor::with_builtin_themes(), &template);

    assert!(label.created_from_template());
    assert_eq!(label.text_style(), Some(TextStyle::Caption));
    assert_eq!(label.text_colour_style_id(), None);

    label.on_attach_to_parent();
    assert!(label.host().style_calls().is_empty());

    label.on_layout();
    assert_eq!(label.host().style_calls().len(), 2);
    assert!(!label.needs_update_theme());
}

#[test]
fn test_switching_variant_needs_an_explicit_refresh() {
    let vendor = ThemeVendor::with_builtin_themes();
    let mut view = View::new(RecordingHost::new(), vendor.clone());
    view.set_background_colour_style(Some(ColourStyle::Background));
    view.on_attach_to_parent();

    let generation = vendor.generation();
    assert!(vendor.switch_theme(&ThemeVariant::Dark));
    assert_ne!(vendor.generation(), generation);

    view.on_layout();
    assert_eq!(
        view.host().background_colour(),
        Theme::light().colour(ColourStyle::Background)
    );

    view.set_needs_update_theme();
    view.on_layout();
    assert_eq!(
        view.host().background_colour(),
        Theme::dark().colour(ColourStyle::Background)
    );
}

#[test]
fn test_boxed_host() {
    let host: Box<dyn ThemeHost> = Box::new(RecordingHost::new());
    let mut view = View::new(host, ThemeVendor::with_builtin_themes());

    view.set_style_id("backgroundColourStyleId", Some("primary")).unwrap();
    assert!(view.update_theme_if_needed());
    assert_eq!(view.background_colour_style(), Some(ColourStyle::Primary));
}

#[test]
fn test_bar_button_item_from_template_is_themed_on_layout() {
    let template = ElementTemplate::new("BarButtonItem").with_property("tintColourStyleId", "accent");
    let mut item = BarButtonItem::from_template(RecordingHost::new(), ThemeVendor::with_builtin_themes(), &template);

    assert!(item.created_from_template());
    assert!(item.needs_update_theme());
    assert!(item.host().calls().is_empty());

    item.on_attach_to_parent();
    assert!(item.host().calls().is_empty());

    item.on_layout();
    assert_eq!(item.host().tint_colour(), Theme::light().colour(ColourStyle::Accent));
    assert!(!item.needs_update_theme());
}
