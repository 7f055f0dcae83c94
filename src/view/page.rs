//! Full page composition
//!
//! The profile header and about text always render; each timeline section
//! renders according to its own fetch state.

use super::experience_list::render_list;
use super::overlay::{render_overlay, OVERLAY_KEYFRAMES};
use super::escape;
use crate::core::{PageSnapshot, Resource};
use crate::models::Profile;

const STYLESHEET: &str = "\
body { margin: 0; background: #fffbeb; color: #111827; font-family: 'Poppins', sans-serif; }
h1, h2, h3 { font-family: 'Tiempos', serif; font-weight: normal; }
.page { min-height: 100vh; padding: 3rem 2rem; }
.header { max-width: 56rem; }
.position { font-style: italic; color: #4b5563; }
.timeline { margin-top: 3rem; }
.experience { display: flex; gap: 1rem; margin-bottom: 2rem; }
.company-logo { width: 3rem; height: 3rem; border-radius: 0.25rem; object-fit: cover; }
.period, .list-status { color: #6b7280; }
.description { list-style: none; padding: 0; }
.bullet { margin-right: 0.5rem; color: #9ca3af; }
.loading-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; \
justify-content: center; background: #fffbeb; }
.overlay-name { font-size: 3rem; color: #1f2937; }";

/// Timelines in page order
const SECTIONS: [Resource; 2] = [Resource::WorkExperience, Resource::Volunteering];

/// Render the complete HTML document for a snapshot
pub fn render_page(profile: &Profile, snapshot: &PageSnapshot) -> String {
    let name = escape(&profile.name);

    let mut html = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{name}</title>\n\
         <style>\n{STYLESHEET}\n{OVERLAY_KEYFRAMES}\n</style>\n\
         </head>\n\
         <body>\n"
    );

    html.push_str(&render_overlay(
        &profile.name,
        snapshot.overlay,
        &snapshot.schedule,
        snapshot.elapsed,
    ));

    html.push_str(&format!(
        "<main class=\"page\">\n\
         <header class=\"header\">\n\
         <h1 class=\"name\">{name}</h1>\n\
         <h2 class=\"position\">{position}</h2>\n\
         </header>\n\
         <p class=\"about\">{about}</p>\n",
        position = escape(&profile.current_position),
        about = escape(&profile.about_me),
    ));

    for resource in SECTIONS {
        html.push_str(&format!(
            "<section class=\"timeline\" id=\"{}\">\n<h2>{}</h2>\n",
            resource.slug(),
            resource.heading()
        ));
        html.push_str(&render_list(resource, snapshot.state(resource)));
        html.push_str("</section>\n");
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
