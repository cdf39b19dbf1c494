use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

fn render(decision: GuardDecision) -> (String, bool) {
    let owner = Owner::new();
    owner.with(|| {
        let mounted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&mounted);
        let children: ChildrenFn = Arc::new(move || {
            flag.store(true, Ordering::SeqCst);
            view! { <p>"protected body"</p> }.into_any()
        });
        let html = guarded_view(Signal::derive(move || decision), children).to_html();
        (html, mounted.load(Ordering::SeqCst))
    })
}

#[test]
fn redirect_never_builds_the_protected_view() {
    let (html, mounted) = render(GuardDecision::Redirect);
    assert!(!mounted);
    assert!(!html.contains("protected body"), "{html}");
    assert!(html.contains("Redirecting to login..."), "{html}");
}

#[test]
fn pending_shows_placeholder_only() {
    let (html, mounted) = render(GuardDecision::Pending);
    assert!(!mounted);
    assert!(html.contains("Loading..."), "{html}");
}

#[test]
fn render_mounts_children() {
    let (html, mounted) = render(GuardDecision::Render);
    assert!(mounted);
    assert!(html.contains("protected body"), "{html}");
}
