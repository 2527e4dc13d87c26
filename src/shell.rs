//! Page shell: composes the header, language switcher and network tabs
//! around the connection form slot.

use crate::config::{ApiConfig, Endpoint};
use crate::context::LanguageContext;
use crate::tabs;

/// Escape text for HTML element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_language_switcher(ctx: &LanguageContext) -> String {
    let strings = ctx.strings();
    let current = ctx.language();

    let options: String = ctx
        .available_languages()
        .iter()
        .map(|lang| {
            let selected = if lang.code == current.code { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&lang.code),
                selected,
                escape_html(&lang.native_name)
            )
        })
        .collect();

    let status = strings
        .current_language
        .replace("{language}", &current.native_name);

    format!(
        r#"<label for="language-select">{}</label><select id="language-select">{}</select><span>{}</span>"#,
        escape_html(strings.language_label),
        options,
        escape_html(&status)
    )
}

fn render_tab_strip(labels: &[&str], active_tab: usize) -> String {
    let buttons: String = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let attrs = tabs::accessibility_attributes(index);
            format!(
                r#"<button role="tab" id="{}" aria-controls="{}" aria-selected="{}">{}</button>"#,
                attrs.id,
                attrs.controls,
                tabs::is_visible(active_tab, index),
                escape_html(label)
            )
        })
        .collect();

    format!(r#"<div role="tablist">{}</div>"#, buttons)
}

/// Render the console page for the context's active language.
///
/// Tab 0 targets the backend directly, tab 1 goes through the CORS proxy.
pub fn render(ctx: &LanguageContext, api: &ApiConfig, active_tab: usize) -> String {
    let strings = ctx.strings();
    let lang = ctx.document_lang().unwrap_or_else(|| ctx.language().code);
    let labels = strings.tab_labels();

    let connect_urls = [
        api.endpoint_url(Endpoint::Connect),
        api.proxied_url(Endpoint::Connect),
    ];

    let panels: String = connect_urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let form = format!(
                r#"<section data-endpoint="{}" data-timeout-ms="{}">{}</section>"#,
                escape_html(url),
                api.timeout_ms,
                escape_html(strings.connection_form_placeholder)
            );
            tabs::render_panel(active_tab, index, &form)
        })
        .collect();

    format!(
        r#"<html lang="{}"><body><header><h1>{}</h1><p>{}</p>{}</header><main>{}{}</main></body></html>"#,
        escape_html(&lang),
        escape_html(strings.app_title),
        escape_html(strings.app_subtitle),
        render_language_switcher(ctx),
        render_tab_strip(&labels, active_tab),
        panels
    )
}
