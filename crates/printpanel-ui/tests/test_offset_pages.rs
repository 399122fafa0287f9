mod common;

use common::{failing_channel, recording_channel, RecordingDialog, WidgetFactory};
use printpanel_communication::SharedChannel;
use printpanel_core::{CommitMode, Offset, OffsetAxis, OffsetError};
use printpanel_ui::calibration::{nozzle_offset, tool_offset};
use printpanel_ui::{
    AxisControls, ConfirmationDialog, ControlFactory, NozzleOffsetAction, NozzleOffsetControls,
    NozzleOffsetPage, OffsetInput, PageResponse, ToolOffsetAction, ToolOffsetControls,
    ToolOffsetPage, ZERO_ENTRY,
};
use proptest::prelude::*;
use std::rc::Rc;

fn nozzle_page(
    factory: &WidgetFactory,
    channel: &SharedChannel,
    dialog: Rc<dyn ConfirmationDialog>,
) -> NozzleOffsetPage {
    let id = nozzle_offset::PAGE_ID;
    NozzleOffsetPage::new(
        channel,
        dialog,
        NozzleOffsetControls {
            input: factory.input(id, nozzle_offset::INPUT),
            display: factory.display(id, nozzle_offset::DISPLAY),
        },
    )
}

fn tool_page(
    factory: &WidgetFactory,
    channel: &SharedChannel,
    dialog: Rc<dyn ConfirmationDialog>,
) -> ToolOffsetPage {
    let id = tool_offset::PAGE_ID;
    let axis = |input: &str, display: &str| AxisControls {
        input: factory.input(id, input),
        display: factory.display(id, display),
    };
    ToolOffsetPage::new(
        channel,
        dialog,
        ToolOffsetControls {
            x: axis(tool_offset::X_INPUT, tool_offset::X_DISPLAY),
            y: axis(tool_offset::Y_INPUT, tool_offset::Y_DISPLAY),
            z: axis(tool_offset::Z_INPUT, tool_offset::Z_DISPLAY),
        },
    )
}

fn committed(response: PageResponse) -> printpanel_ui::CommitOutcome {
    match response {
        PageResponse::Committed(outcome) => outcome,
        other => panic!("expected a commit, got {:?}", other),
    }
}

#[test]
fn test_nozzle_offset_accumulates() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = recording_channel();
    let mut page = nozzle_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    assert_eq!(factory.shown(nozzle_offset::DISPLAY), "0.00 mm");

    factory.type_into(nozzle_offset::INPUT, "1.5");
    let first = committed(page.activate(NozzleOffsetAction::Set));
    assert_eq!(first.mode, CommitMode::Additive);
    assert_eq!(factory.shown(nozzle_offset::DISPLAY), "1.50 mm");

    factory.type_into(nozzle_offset::INPUT, "0.25");
    page.activate(NozzleOffsetAction::Set);
    assert_eq!(factory.shown(nozzle_offset::DISPLAY), "1.75 mm");
    assert_eq!(page.current_offset(), Offset::from_mm(1.75));

    assert_eq!(
        recorder.borrow().sent,
        ["M851 Z1.5", "M500", "M851 Z0.25", "M500"]
    );
}

#[test]
fn test_tool_offset_replaces() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = recording_channel();
    let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    factory.type_into(tool_offset::X_INPUT, "1.5");
    page.activate(ToolOffsetAction::SetX);
    assert_eq!(factory.shown(tool_offset::X_DISPLAY), "1.50 mm");

    factory.type_into(tool_offset::X_INPUT, "0.25");
    let outcome = committed(page.activate(ToolOffsetAction::SetX));
    assert_eq!(outcome.mode, CommitMode::Replacing);
    assert_eq!(factory.shown(tool_offset::X_DISPLAY), "0.25 mm");
    assert_eq!(
        recorder.borrow().sent,
        ["M218 T1 X1.5", "M500", "M218 T1 X0.25", "M500"]
    );
}

#[test]
fn test_tool_axes_are_independent() {
    let factory = WidgetFactory::complete();
    let (_, channel) = recording_channel();
    let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    factory.type_into(tool_offset::X_INPUT, "1");
    page.activate(ToolOffsetAction::SetX);
    factory.type_into(tool_offset::Y_INPUT, "-2.5");
    page.activate(ToolOffsetAction::SetY);

    assert_eq!(page.current_offset(OffsetAxis::ToolX), Offset::from_mm(1.0));
    assert_eq!(page.current_offset(OffsetAxis::ToolY), Offset::from_mm(-2.5));
    assert_eq!(page.current_offset(OffsetAxis::ToolZ), Some(Offset::ZERO));
    assert_eq!(page.current_offset(OffsetAxis::ZProbe), None);
    assert_eq!(factory.shown(tool_offset::Z_DISPLAY), "0.00 mm");
}

#[test]
fn test_set_z_sends_z_command() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = recording_channel();
    let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    factory.type_into(tool_offset::Z_INPUT, "0.3");
    let outcome = committed(page.activate(ToolOffsetAction::SetZ));

    assert_eq!(outcome.axis, OffsetAxis::ToolZ);
    assert_eq!(recorder.borrow().sent, ["M218 T1 Z0.3", "M500"]);
    assert_eq!(factory.shown(tool_offset::Z_DISPLAY), "0.30 mm");
    assert_eq!(factory.shown(tool_offset::Y_DISPLAY), "0.00 mm");
    assert_eq!(factory.input_handle(tool_offset::Y_INPUT).raw_value(), ZERO_ENTRY);
}

#[test]
fn test_entry_is_rounded_before_sending() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = recording_channel();
    let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    factory.type_into(tool_offset::X_INPUT, "1.005");
    page.activate(ToolOffsetAction::SetX);

    assert_eq!(recorder.borrow().sent[0], "M218 T1 X1.0");
    assert_eq!(factory.shown(tool_offset::X_DISPLAY), "1.00 mm");
}

#[test]
fn test_malformed_input_never_reaches_channel() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = recording_channel();
    let dialog = Rc::new(RecordingDialog::answering(true));
    let mut page = nozzle_page(&factory, &channel, dialog.clone());

    for raw in ["abc", "NaN", "", "inf"] {
        factory.type_into(nozzle_offset::INPUT, raw);
        let response = page.activate(NozzleOffsetAction::Set);
        assert!(
            matches!(response, PageResponse::Failed(OffsetError::InvalidInput { .. })),
            "{:?} was accepted",
            raw
        );
        assert_eq!(factory.input_handle(nozzle_offset::INPUT).raw_value(), raw);
    }

    assert!(recorder.borrow().sent.is_empty());
    assert_eq!(factory.shown(nozzle_offset::DISPLAY), "0.00 mm");
    assert_eq!(dialog.warnings.borrow().len(), 4);
}

#[test]
fn test_failed_save_keeps_display() {
    let factory = WidgetFactory::complete();
    let (recorder, channel) = failing_channel("M500");
    let dialog = Rc::new(RecordingDialog::answering(true));
    let mut page = nozzle_page(&factory, &channel, dialog.clone());

    factory.type_into(nozzle_offset::INPUT, "0.5");
    let response = page.activate(NozzleOffsetAction::Set);

    match response {
        PageResponse::Failed(OffsetError::DeviceCommand { command, index, .. }) => {
            assert_eq!(command, "M500");
            assert_eq!(index, 1);
        }
        other => panic!("expected a device failure, got {:?}", other),
    }
    assert_eq!(recorder.borrow().sent, ["M851 Z0.5", "M500"]);
    assert_eq!(factory.shown(nozzle_offset::DISPLAY), "0.00 mm");
    assert_eq!(factory.input_handle(nozzle_offset::INPUT).raw_value(), "0.5");
    assert_eq!(page.current_offset(), Some(Offset::ZERO));

    let warnings = dialog.warnings.borrow();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("M500"));
}

#[test]
fn test_input_reset_after_commit() {
    let factory = WidgetFactory::complete();
    let (_, channel) = recording_channel();
    let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    factory.type_into(tool_offset::Y_INPUT, "-0.75");
    page.activate(ToolOffsetAction::SetY);

    assert_eq!(factory.input_handle(tool_offset::Y_INPUT).raw_value(), ZERO_ENTRY);
    assert_eq!(factory.shown(tool_offset::Y_DISPLAY), "-0.75 mm");
}

#[test]
fn test_missing_display_disables_only_its_axis() {
    let factory = WidgetFactory::complete().without(tool_offset::Y_DISPLAY);
    let (recorder, channel) = recording_channel();
    let dialog = Rc::new(RecordingDialog::answering(true));
    let mut page = tool_page(&factory, &channel, dialog.clone());

    assert!(!page.is_enabled(ToolOffsetAction::SetY));
    assert!(page.is_enabled(ToolOffsetAction::SetX));
    assert!(page.is_enabled(ToolOffsetAction::SetZ));
    assert!(page.is_enabled(ToolOffsetAction::Back));

    factory.type_into(tool_offset::Y_INPUT, "1");
    assert_eq!(page.activate(ToolOffsetAction::SetY), PageResponse::Ignored);
    assert!(recorder.borrow().sent.is_empty());
    assert!(dialog.warnings.borrow().is_empty());

    factory.type_into(tool_offset::X_INPUT, "1");
    committed(page.activate(ToolOffsetAction::SetX));
    factory.type_into(tool_offset::Z_INPUT, "1");
    committed(page.activate(ToolOffsetAction::SetZ));
    assert_eq!(
        recorder.borrow().sent,
        ["M218 T1 X1.0", "M500", "M218 T1 Z1.0", "M500"]
    );
}

#[test]
fn test_missing_input_keeps_back_working() {
    let factory = WidgetFactory::complete().without(nozzle_offset::INPUT);
    let (recorder, channel) = recording_channel();
    let mut page = nozzle_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

    assert!(!page.is_enabled(NozzleOffsetAction::Set));
    assert_eq!(page.current_offset(), None);
    assert_eq!(page.activate(NozzleOffsetAction::Set), PageResponse::Ignored);
    assert_eq!(page.activate(NozzleOffsetAction::Back), PageResponse::NavigateBack);
    assert!(recorder.borrow().sent.is_empty());
}

proptest! {
    #[test]
    fn prop_additive_display_is_rounded_sum(
        hundredths in prop::collection::vec(-1000i32..1000, 1..8)
    ) {
        let factory = WidgetFactory::complete();
        let (recorder, channel) = recording_channel();
        let mut page = nozzle_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

        for value in &hundredths {
            factory.type_into(nozzle_offset::INPUT, &format!("{:.2}", *value as f64 / 100.0));
            let response = page.activate(NozzleOffsetAction::Set);
            let is_committed = matches!(response, PageResponse::Committed(_));
            prop_assert!(is_committed);
        }

        let total: i32 = hundredths.iter().sum();
        prop_assert_eq!(
            factory.shown(nozzle_offset::DISPLAY),
            format!("{:.2} mm", total as f64 / 100.0)
        );
        prop_assert_eq!(recorder.borrow().sent.len(), hundredths.len() * 2);
    }

    #[test]
    fn prop_replacing_display_is_last_entry(
        hundredths in prop::collection::vec(-1000i32..1000, 1..8)
    ) {
        let factory = WidgetFactory::complete();
        let (_, channel) = recording_channel();
        let mut page = tool_page(&factory, &channel, Rc::new(RecordingDialog::answering(true)));

        for value in &hundredths {
            factory.type_into(tool_offset::X_INPUT, &format!("{:.2}", *value as f64 / 100.0));
            page.activate(ToolOffsetAction::SetX);
        }

        let last = hundredths[hundredths.len() - 1];
        prop_assert_eq!(
            factory.shown(tool_offset::X_DISPLAY),
            format!("{:.2} mm", last as f64 / 100.0)
        );
    }
}
