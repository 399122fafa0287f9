//! Calibration screen
//!
//! Pages are registered statically in [`PageRegistry::calibration`] and built
//! once when the screen is created. The screen shows either its main page
//! (the list of page titles) or one calibration page, and routes actions to
//! whichever page is open.

use crate::calibration::{
    nozzle_offset, tool_offset, AxisControls, CalibrationPage, NozzleOffsetControls,
    NozzleOffsetPage, PageAction, PageResponse, ToolOffsetControls, ToolOffsetPage,
};
use crate::controls::{ConfirmationDialog, OffsetDisplay, OffsetInput};
use printpanel_communication::SharedChannel;
use std::rc::Rc;
use thiserror::Error;
use tracing::{error, info};

/// Navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// No page with this id is registered
    #[error("Unknown calibration page: {id}")]
    UnknownPage { id: String },

    /// A page action arrived while the main page was shown
    #[error("No calibration page is open")]
    NoPageOpen,
}

/// Supplies control handles when a page is assembled
///
/// Implemented by the toolkit layer. Returning `None` means the control
/// does not exist; the page disables the action that needs it.
pub trait ControlFactory {
    /// Spin box called `name` on `page`
    fn input(&self, page: &str, name: &str) -> Option<Box<dyn OffsetInput>>;

    /// Label called `name` on `page`
    fn display(&self, page: &str, name: &str) -> Option<Box<dyn OffsetDisplay>>;
}

/// Everything a page needs to build itself
pub struct PageContext<'a> {
    pub channel: SharedChannel,
    pub dialog: Rc<dyn ConfirmationDialog>,
    pub factory: &'a dyn ControlFactory,
}

impl PageContext<'_> {
    fn axis_controls(&self, page: &str, input: &str, display: &str) -> AxisControls {
        AxisControls {
            input: self.factory.input(page, input),
            display: self.factory.display(page, display),
        }
    }
}

/// A registered calibration page
pub struct PageEntry {
    /// Stable id, also the source of the button title
    pub id: &'static str,
    /// Assembles the page from the screen's context
    pub build: fn(&PageContext<'_>) -> CalibrationPage,
}

fn build_nozzle_offset(ctx: &PageContext<'_>) -> CalibrationPage {
    let id = nozzle_offset::PAGE_ID;
    let controls = NozzleOffsetControls {
        input: ctx.factory.input(id, nozzle_offset::INPUT),
        display: ctx.factory.display(id, nozzle_offset::DISPLAY),
    };
    CalibrationPage::NozzleOffset(NozzleOffsetPage::new(
        &ctx.channel,
        ctx.dialog.clone(),
        controls,
    ))
}

fn build_tool_offset(ctx: &PageContext<'_>) -> CalibrationPage {
    let id = tool_offset::PAGE_ID;
    let controls = ToolOffsetControls {
        x: ctx.axis_controls(id, tool_offset::X_INPUT, tool_offset::X_DISPLAY),
        y: ctx.axis_controls(id, tool_offset::Y_INPUT, tool_offset::Y_DISPLAY),
        z: ctx.axis_controls(id, tool_offset::Z_INPUT, tool_offset::Z_DISPLAY),
    };
    CalibrationPage::ToolOffset(ToolOffsetPage::new(
        &ctx.channel,
        ctx.dialog.clone(),
        controls,
    ))
}

static CALIBRATION_PAGES: &[PageEntry] = &[
    PageEntry {
        id: nozzle_offset::PAGE_ID,
        build: build_nozzle_offset,
    },
    PageEntry {
        id: tool_offset::PAGE_ID,
        build: build_tool_offset,
    },
];

/// Ordered list of pages a screen is built from
#[derive(Clone, Copy)]
pub struct PageRegistry {
    entries: &'static [PageEntry],
}

impl PageRegistry {
    /// Pages of the calibration screen, in button order
    pub fn calibration() -> Self {
        Self {
            entries: CALIBRATION_PAGES,
        }
    }

    pub fn entries(&self) -> &'static [PageEntry] {
        self.entries
    }

    pub fn find(&self, id: &str) -> Option<&'static PageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

/// Button label for a page id: `"tool_offset"` becomes `"Tool Offset"`
pub fn page_title(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Page currently shown by the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPage {
    /// The list of page buttons
    Main,
    /// A calibration page, by id
    Page(&'static str),
}

/// Calibration screen holding every registered page
pub struct CalibrationScreen {
    pages: Vec<(&'static str, CalibrationPage)>,
    current: ScreenPage,
}

impl CalibrationScreen {
    /// Build every page in `registry`
    pub fn build(registry: PageRegistry, ctx: &PageContext<'_>) -> Self {
        let pages = registry
            .entries()
            .iter()
            .map(|entry| (entry.id, (entry.build)(ctx)))
            .collect::<Vec<_>>();
        info!("Calibration screen built with {} pages", pages.len());
        Self {
            pages,
            current: ScreenPage::Main,
        }
    }

    /// Page currently shown
    pub fn current(&self) -> ScreenPage {
        self.current
    }

    /// Page titles in registry order
    pub fn titles(&self) -> Vec<String> {
        self.pages.iter().map(|(id, _)| page_title(id)).collect()
    }

    /// Ids in registry order
    pub fn ids(&self) -> Vec<&'static str> {
        self.pages.iter().map(|(id, _)| *id).collect()
    }

    /// Show the page registered as `id`
    pub fn open(&mut self, id: &str) -> Result<(), ScreenError> {
        match self.pages.iter().find(|(page_id, _)| *page_id == id) {
            Some(&(page_id, _)) => {
                info!("Opening {}", page_title(page_id));
                self.current = ScreenPage::Page(page_id);
                Ok(())
            }
            None => {
                let err = ScreenError::UnknownPage { id: id.to_string() };
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Return to the main calibration page
    pub fn back(&mut self) {
        if self.current != ScreenPage::Main {
            info!("Returning to main calibration page");
        }
        self.current = ScreenPage::Main;
    }

    /// Look up a built page by id
    pub fn page(&self, id: &str) -> Option<&CalibrationPage> {
        self.pages
            .iter()
            .find(|(page_id, _)| *page_id == id)
            .map(|(_, page)| page)
    }

    /// Page that is open, if any
    pub fn current_page(&self) -> Option<&CalibrationPage> {
        match self.current {
            ScreenPage::Main => None,
            ScreenPage::Page(id) => self.page(id),
        }
    }

    /// Send `action` to the open page
    ///
    /// A `NavigateBack` response switches the screen to its main page.
    pub fn dispatch(&mut self, action: PageAction) -> Result<PageResponse, ScreenError> {
        let ScreenPage::Page(id) = self.current else {
            return Err(ScreenError::NoPageOpen);
        };
        let page = self
            .pages
            .iter_mut()
            .find(|(page_id, _)| *page_id == id)
            .map(|(_, page)| page)
            .ok_or_else(|| ScreenError::UnknownPage { id: id.to_string() })?;

        let response = page.dispatch(action);
        if response == PageResponse::NavigateBack {
            self.back();
        }
        Ok(response)
    }
}
