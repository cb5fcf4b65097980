//! List Refresh
//!
//! One request fetches fresh fragments for all three panels; only the
//! requested ones are applied. The newest response wins.

use leptos::task::spawn_local;

use crate::api;
use crate::components::{available_list, chosen_list, no_application_list};
use crate::context::PageContext;
use crate::models::Sections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Chosen,
    Available,
    NoApplication,
}

/// Set of panels to refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    chosen: bool,
    available: bool,
    no_application: bool,
}

impl Areas {
    pub const ALL: Areas = Areas { chosen: true, available: true, no_application: true };
    pub const NO_APPLICATION: Areas = Areas::only(Area::NoApplication);

    pub const fn only(area: Area) -> Areas {
        Areas {
            chosen: matches!(area, Area::Chosen),
            available: matches!(area, Area::Available),
            no_application: matches!(area, Area::NoApplication),
        }
    }

    pub fn contains(self, area: Area) -> bool {
        match area {
            Area::Chosen => self.chosen,
            Area::Available => self.available,
            Area::NoApplication => self.no_application,
        }
    }
}

impl Default for Areas {
    fn default() -> Self {
        Areas::ALL
    }
}

/// Pick the fragments to apply, in application order.
pub fn fragments(areas: Areas, sections: Sections) -> Vec<(Area, String)> {
    [
        (Area::Chosen, sections.chosen),
        (Area::Available, sections.available),
        (Area::NoApplication, sections.noapplicationform),
    ]
    .into_iter()
    .filter(|(area, _)| areas.contains(*area))
    .filter_map(|(area, html)| html.map(|html| (area, html)))
    .collect()
}

pub async fn refresh_lists(ctx: PageContext, areas: Areas) {
    let sections = match ctx.track(api::fetch_sections()).await {
        Ok(sections) => sections,
        Err(e) => {
            log::warn!("[REFRESH] {}", e);
            return;
        }
    };
    for (area, html) in fragments(areas, sections) {
        match area {
            Area::Chosen => chosen_list::render(ctx, &html),
            Area::Available => available_list::render(&html),
            Area::NoApplication => no_application_list::render(&html),
        }
    }
}

pub fn spawn_refresh(ctx: PageContext, areas: Areas) {
    spawn_local(refresh_lists(ctx, areas));
}
