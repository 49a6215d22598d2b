use dioxus::document::eval;
use phonics_core::navigation::{FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET, FOCUSABLE_SELECTOR};

const FOCUS_BINDING_SCRIPT_TEMPLATE: &str = r#"
    if (window.__phonicsFocusBinding) { return false; }
    window.__phonicsFocusBinding = true;
    const bind = (el) => {
        if (el.dataset.focusBound) { return; }
        el.dataset.focusBound = "1";
        el.addEventListener("focus", () => {
            el.style.outline = "{outline}";
            el.style.outlineOffset = "{offset}";
        });
        el.addEventListener("blur", () => {
            el.style.outline = "";
            el.style.outlineOffset = "";
        });
    };
    const selector = "{selector}";
    document.querySelectorAll(selector).forEach(bind);
    new MutationObserver((mutations) => {
        mutations.forEach((mutation) => {
            mutation.addedNodes.forEach((node) => {
                if (node.nodeType !== Node.ELEMENT_NODE) { return; }
                if (node.matches(selector)) { bind(node); }
                node.querySelectorAll(selector).forEach(bind);
            });
        });
    }).observe(document.body, { childList: true, subtree: true });
    document.addEventListener("keydown", (event) => {
        if (event.key !== "Escape") { return; }
        const root = document.querySelector(".app-root");
        if (root && root.contains(event.target)) { return; }
        const nav = document.querySelector(".nav-btn");
        if (nav) { nav.focus(); }
    });
    return true;
"#;

const GRID_COLUMNS_SCRIPT_TEMPLATE: &str = r#"
    const grid = document.getElementById("{grid_id}");
    if (!grid) { return ""; }
    return getComputedStyle(grid).gridTemplateColumns || "";
"#;

const GRID_RESIZE_WATCH_SCRIPT_TEMPLATE: &str = r#"
    const grid = document.getElementById("{grid_id}");
    if (!grid) { return; }
    const report = () => dioxus.send(getComputedStyle(grid).gridTemplateColumns || "");
    new ResizeObserver(report).observe(grid);
    await new Promise(() => {});
"#;

const SCRIPT_FAULT_WATCH_SCRIPT: &str = r#"
    window.addEventListener("error", (event) => {
        dioxus.send(event.message || "script error");
    });
    await new Promise(() => {});
"#;

pub(crate) fn focus_binding_script() -> String {
    FOCUS_BINDING_SCRIPT_TEMPLATE
        .replace("{outline}", FOCUS_OUTLINE)
        .replace("{offset}", FOCUS_OUTLINE_OFFSET)
        .replace("{selector}", FOCUSABLE_SELECTOR)
}

pub(crate) fn grid_card_focus_script(grid_id: &str, index: usize) -> String {
    format!(r##"document.querySelector("#{grid_id} [data-index='{index}']")?.focus();"##)
}

pub(crate) const FIRST_NAV_FOCUS_SCRIPT: &str = r#"document.querySelector(".nav-btn")?.focus();"#;

/// Binds the focus ring to every focusable element, present and future.
/// Returns `true` only for the call that actually installed it.
pub async fn install_focus_binding() -> bool {
    eval(&focus_binding_script())
        .join::<bool>()
        .await
        .unwrap_or(false)
}

/// The grid's computed `grid-template-columns`, if it is mounted.
pub async fn read_grid_track_list(grid_id: &str) -> Option<String> {
    let script = GRID_COLUMNS_SCRIPT_TEMPLATE.replace("{grid_id}", grid_id);
    eval(&script)
        .join::<String>()
        .await
        .ok()
        .filter(|tracks| !tracks.is_empty())
}

pub(crate) fn grid_resize_watch_script(grid_id: &str) -> String {
    GRID_RESIZE_WATCH_SCRIPT_TEMPLATE.replace("{grid_id}", grid_id)
}

/// Reports the grid's track list once it is laid out and again after every
/// resize. Ends when the page stops answering.
pub async fn watch_grid_track_list(grid_id: &str, mut on_change: impl FnMut(String)) {
    let mut watcher = eval(&grid_resize_watch_script(grid_id));
    while let Ok(tracks) = watcher.recv::<String>().await {
        if !tracks.is_empty() {
            on_change(tracks);
        }
    }
}

/// Forwards uncaught page script errors to `on_fault`.
pub async fn watch_script_faults(mut on_fault: impl FnMut(String)) {
    let mut watcher = eval(SCRIPT_FAULT_WATCH_SCRIPT);
    while let Ok(message) = watcher.recv::<String>().await {
        on_fault(message);
    }
}

pub fn focus_grid_card(grid_id: &str, index: usize) {
    let _ = eval(&grid_card_focus_script(grid_id, index));
}

pub fn focus_first_nav() {
    let _ = eval(FIRST_NAV_FOCUS_SCRIPT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_binding_uses_the_shared_ring_and_selector() {
        let script = focus_binding_script();
        assert!(script.contains(r#"el.style.outline = "3px solid #F39C12";"#));
        assert!(script.contains(r#"el.style.outlineOffset = "2px";"#));
        assert!(script.contains(r#"const selector = "button, [tabindex]";"#));
        assert!(script.contains("window.__phonicsFocusBinding"));
    }

    #[test]
    fn grid_watch_reports_on_every_resize() {
        let script = grid_resize_watch_script("sounds-grid");
        assert!(script.contains(r#"document.getElementById("sounds-grid")"#));
        assert!(script.contains("new ResizeObserver(report).observe(grid)"));
        assert!(script.contains("dioxus.send(getComputedStyle(grid).gridTemplateColumns"));
    }

    #[test]
    fn fault_watch_listens_for_window_errors() {
        assert!(SCRIPT_FAULT_WATCH_SCRIPT.contains(r#"window.addEventListener("error""#));
        assert!(SCRIPT_FAULT_WATCH_SCRIPT.contains("dioxus.send("));
    }

    #[test]
    fn grid_focus_targets_card_by_index() {
        assert_eq!(
            grid_card_focus_script("letter-grid", 4),
            r##"document.querySelector("#letter-grid [data-index='4']")?.focus();"##
        );
    }
}
