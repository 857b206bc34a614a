use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::content::{asset_url, pdf_thumb_url, pdf_url, text_lines, Portfolio, Video};
use crate::drag::{DragScroll, DRAGGING_CLASS};
use crate::gallery::{layout, GalleryOffset, WheelDirection};
use crate::header::HeaderStyle;

fn current_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn open_in_new_tab(url: &str) {
    let Some(win) = window() else {
        return;
    };

    if win.open_with_url_and_target(url, "_blank").is_err() {
        gloo::console::warn!("failed to open", url.to_string());
    }
}

fn open_on_click(url: String) -> Callback<MouseEvent> {
    Callback::from(move |_| open_in_new_tab(&url))
}

fn description(text: &str) -> Html {
    text_lines(text)
        .into_iter()
        .map(|line| html! { <span class="line">{line.to_string()}</span> })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    content: Rc<Portfolio>,
}

#[function_component(HeroHeader)]
fn hero_header(props: &ContentProps) -> Html {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| scroll_y.set(current_scroll_y()))
            });
            move || drop(listener)
        });
    }

    let hero = &props.content.hero;
    let style = HeaderStyle::from_scroll(*scroll_y).to_css();

    html! {
        <header class="main-header" style={style}>
            <h1 class="asset-font">
                {hero.title.clone()}{" "}<span class="pf">{hero.accent.clone()}</span>
            </h1>
            { for hero.taglines.iter().map(|line| html! {
                <h2 class="asset-font">{line.clone()}</h2>
            }) }
        </header>
    }
}

#[function_component(OverlapGallery)]
fn overlap_gallery(props: &ContentProps) -> Html {
    let images = use_memo(props.content.clone(), |content| content.gallery_images());
    let section_ref = use_node_ref();
    let offset = use_mut_ref(GalleryOffset::default);
    let rendered = use_state(GalleryOffset::default);

    {
        let section_ref = section_ref.clone();
        let offset = offset.clone();
        let rendered = rendered.clone();
        let image_count = images.len();
        use_effect_with(image_count, move |&image_count| {
            let listener = section_ref.cast::<HtmlElement>().map(|section| {
                // Registered by hand: wheel handlers attached through `html!` are passive.
                EventListener::new_with_options(
                    &section,
                    "wheel",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                            return;
                        };
                        let Some(direction) = WheelDirection::from_delta(wheel.delta_y()) else {
                            return;
                        };

                        let current = *offset.borrow();
                        let next = current.advance(direction, image_count);
                        if next == current {
                            return;
                        }

                        event.prevent_default();
                        *offset.borrow_mut() = next;
                        rendered.set(next);
                    },
                )
            });

            if listener.is_none() {
                gloo::console::warn!("gallery element missing; wheel input disabled");
            }

            move || drop(listener)
        });
    }

    let layouts = layout(*rendered, images.len());

    html! {
        <section
            class="overlap-gallery"
            ref={section_ref}
            data-offset={format!("{:.1}", rendered.value())}
        >
            <div class="overlap-container">
                { for images.iter().zip(layouts).enumerate().map(|(idx, (src, placement))| html! {
                    <img
                        key={src.clone()}
                        src={src.clone()}
                        alt={format!("img-{idx}")}
                        class={classes!("overlap-img", placement.placement.class_name())}
                        style={placement.to_css()}
                    />
                }) }
            </div>
        </section>
    }
}

struct DragScrollHandlers {
    dragging: bool,
    onmousedown: Callback<MouseEvent>,
    onmousemove: Callback<MouseEvent>,
    onmouseup: Callback<MouseEvent>,
    onmouseleave: Callback<MouseEvent>,
    ondragstart: Callback<DragEvent>,
}

#[hook]
fn use_drag_scroll(strip_ref: NodeRef) -> DragScrollHandlers {
    let drag = use_mut_ref(DragScroll::default);
    let dragging = use_state(|| false);

    let onmousedown = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        let dragging = dragging.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(strip) = strip_ref.cast::<HtmlElement>() else {
                return;
            };
            drag.borrow_mut().begin(
                f64::from(event.page_x()),
                f64::from(strip.offset_left()),
                f64::from(strip.scroll_left()),
            );
            dragging.set(true);
        })
    };

    let onmousemove = {
        let drag = drag.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(strip) = strip_ref.cast::<HtmlElement>() else {
                return;
            };
            let Some(scroll_left) = drag
                .borrow()
                .scroll_for(f64::from(event.page_x()), f64::from(strip.offset_left()))
            else {
                return;
            };
            event.prevent_default();
            strip.set_scroll_left(scroll_left.round() as i32);
        })
    };

    let end_drag = {
        let dragging = dragging.clone();
        Rc::new(move || {
            if !drag.borrow().is_active() {
                return;
            }
            drag.borrow_mut().end();
            dragging.set(false);
        })
    };

    let release = {
        let end_drag = end_drag.clone();
        Callback::from(move |_: MouseEvent| end_drag())
    };

    // Native drag-and-drop swallows the mousemove/mouseup that would end the pan.
    let ondragstart = Callback::from(move |_: DragEvent| end_drag());

    DragScrollHandlers {
        dragging: *dragging,
        onmousedown,
        onmousemove,
        onmouseup: release.clone(),
        onmouseleave: release,
        ondragstart,
    }
}

#[derive(Properties, PartialEq)]
struct VideoBoxProps {
    video: Video,
}

#[function_component(VideoBox)]
fn video_box(props: &VideoBoxProps) -> Html {
    html! {
        <div class="video-box">
            <video
                src={asset_url(&props.video.source)}
                poster={asset_url(&props.video.poster)}
                controls={true}
            />
            <p class="video-desc">{description(&props.video.description)}</p>
        </div>
    }
}

#[function_component(ProfileVideos)]
fn profile_videos(props: &ContentProps) -> Html {
    let strip_ref = use_node_ref();
    let drag = use_drag_scroll(strip_ref.clone());
    let profile = &props.content.profile;

    html! {
        <section
            class={classes!("profile-video-section", drag.dragging.then_some(DRAGGING_CLASS))}
            ref={strip_ref}
            onmousedown={drag.onmousedown}
            onmousemove={drag.onmousemove}
            onmouseup={drag.onmouseup}
            onmouseleave={drag.onmouseleave}
            ondragstart={drag.ondragstart}
        >
            <div class="profile-top-row">
                <div class="profile-block">
                    <div class="profile-circle">
                        <img
                            src={asset_url(&profile.photo)}
                            alt="Profile"
                            class="profile-img"
                            draggable="false"
                        />
                    </div>
                    <div class="profile-text">
                        <p class="kor-name">{profile.korean_name.clone()}</p>
                        <p class="eng-name">{profile.english_name.clone()}</p>
                        <p class="info">
                            {profile.phone.clone()}<br />
                            {profile.email.clone()}<br />
                            {profile.education.clone()}<br />
                            <a
                                href={profile.instagram.href.clone()}
                                target="_blank"
                                rel="noreferrer"
                                class="insta-link"
                            >
                                {profile.instagram.label.clone()}
                            </a>
                        </p>
                    </div>
                </div>
                <div class="video-grid-top">
                    { for props.content.top_videos().iter().map(|video| html! {
                        <VideoBox key={video.source.clone()} video={video.clone()} />
                    }) }
                </div>
            </div>
            <div class="video-grid-bottom">
                { for props.content.bottom_videos().iter().map(|video| html! {
                    <VideoBox key={video.source.clone()} video={video.clone()} />
                }) }
            </div>
        </section>
    }
}

#[function_component(FooterColumns)]
fn footer_columns(props: &ContentProps) -> Html {
    let footer = &props.content.footer;
    let site = &footer.site;

    html! {
        <section class="footer-section">
            <div class="footer-col">
                <h3>{footer.team_projects.heading.clone()}</h3>
                { for footer.team_projects.projects.iter().map(|project| html! {
                    <div class="project" key={project.link.href.clone()}>
                        <img
                            src={asset_url(&project.image)}
                            alt={project.alt.clone()}
                            onclick={open_on_click(project.link.href.clone())}
                        />
                        <a href={project.link.href.clone()} target="_blank" rel="noreferrer">
                            {project.link.label.clone()}
                        </a>
                        <p>{project.role.clone()}</p>
                    </div>
                }) }
            </div>

            <div class="footer-col">
                <h3>{footer.pdfs.heading.clone()}</h3>
                <p class="pdf-desc">{footer.pdfs.description.clone()}</p>
                <div class="pdf-thumbs">
                    { for footer.pdfs.documents.iter().map(|name| html! {
                        <img
                            key={name.clone()}
                            src={pdf_thumb_url(name)}
                            alt={name.clone()}
                            onclick={open_on_click(pdf_url(name))}
                        />
                    }) }
                </div>
            </div>

            <div class="footer-col">
                <h3>{site.heading.clone()}</h3>
                <img
                    src={asset_url(&site.image)}
                    alt="portfolio"
                    class="portfolio-thumb"
                    onclick={open_on_click(site.link.href.clone())}
                />
                <a href={site.link.href.clone()} target="_blank" rel="noreferrer" class="portfolio-link">
                    {site.link.label.clone()}
                    <p>{site.description.clone()}</p>
                </a>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let content = use_memo((), |_| Portfolio::load().map(Rc::new));

    match &*content {
        Ok(content) => html! {
            <div class="main-container">
                <HeroHeader content={content.clone()} />
                <OverlapGallery content={content.clone()} />
                <ProfileVideos content={content.clone()} />
                <FooterColumns content={content.clone()} />
            </div>
        },
        Err(err) => {
            gloo::console::error!("portfolio content unavailable", err.to_string());
            html! {
                <div class="main-container">
                    <p class="content-error">{"This page is temporarily unavailable."}</p>
                </div>
            }
        }
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
