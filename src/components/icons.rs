use dioxus::prelude::*;

/// Outline icon on a 24x24 grid, drawn with the current text color.
#[component]
fn Outline(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn Icon(name: String, class: String) -> Element {
    match name.as_str() {
        // Transport glyphs are solid.
        "play" => rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "6 4 20 12 6 20 6 4" }
            }
        },
        "pause" => rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                rect { x: "6", y: "5", width: "4", height: "14", rx: "1" }
                rect { x: "14", y: "5", width: "4", height: "14", rx: "1" }
            }
        },
        "playlist" => rsx! {
            Outline { class,
                path { d: "M3 6h13M3 12h9M3 18h9M21 15V6" }
                circle { cx: "18.5", cy: "15.5", r: "2.5" }
            }
        },
        "folder" => rsx! {
            Outline { class,
                path { d: "M3 7a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            }
        },
        "music" => rsx! {
            Outline { class,
                path { d: "M9 17V5l11-2v12" }
                circle { cx: "6.5", cy: "17", r: "2.5" }
                circle { cx: "17.5", cy: "15", r: "2.5" }
            }
        },
        "plus" => rsx! {
            Outline { class, path { d: "M12 5v14M5 12h14" } }
        },
        "check" => rsx! {
            Outline { class, path { d: "M5 12.5l4.5 4.5L19 7" } }
        },
        "x" => rsx! {
            Outline { class, path { d: "M6 6l12 12M18 6L6 18" } }
        },
        "trash" => rsx! {
            Outline { class,
                path { d: "M4 7h16M9 7V4h6v3M6 7l1 13h10l1-13" }
            }
        },
        "loader" => rsx! {
            Outline { class: format!("{class} animate-spin"),
                circle { cx: "12", cy: "12", r: "9", opacity: "0.25" }
                path { d: "M12 3a9 9 0 0 1 9 9", opacity: "0.75" }
            }
        },
        "arrow-left" => rsx! {
            Outline { class, path { d: "M19 12H5M11 18l-6-6 6-6" } }
        },
        _ => rsx! {
            Outline { class, circle { cx: "12", cy: "12", r: "9" } }
        },
    }
}
