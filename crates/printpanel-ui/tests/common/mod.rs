#![allow(dead_code)]

use printpanel_communication::{CommandChannel, SharedChannel};
use printpanel_core::{shared, ChannelError, Shared};
use printpanel_ui::calibration::{nozzle_offset, tool_offset};
use printpanel_ui::{
    ConfirmationDialog, ControlFactory, LabelDisplay, OffsetDisplay, OffsetInput, SpinBoxInput,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Channel that records every command and can fail on one of them
#[derive(Default)]
pub struct RecordingChannel {
    pub sent: Vec<String>,
    pub fail_on: Option<String>,
}

impl CommandChannel for RecordingChannel {
    fn execute(&mut self, command: &str) -> Result<(), ChannelError> {
        self.sent.push(command.to_string());
        if self.fail_on.as_deref() == Some(command) {
            return Err(ChannelError::Rejected {
                status: 409,
                message: "Printer is not operational".to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn recording_channel() -> (Shared<RecordingChannel>, SharedChannel) {
    let recorder = shared(RecordingChannel::default());
    let channel: SharedChannel = recorder.clone();
    (recorder, channel)
}

pub fn failing_channel(command: &str) -> (Shared<RecordingChannel>, SharedChannel) {
    let recorder = shared(RecordingChannel {
        sent: Vec::new(),
        fail_on: Some(command.to_string()),
    });
    let channel: SharedChannel = recorder.clone();
    (recorder, channel)
}

/// Dialog that remembers what it was shown
pub struct RecordingDialog {
    answer: bool,
    pub warnings: RefCell<Vec<String>>,
    pub questions: RefCell<Vec<String>>,
}

impl RecordingDialog {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            warnings: RefCell::new(Vec::new()),
            questions: RefCell::new(Vec::new()),
        }
    }
}

impl ConfirmationDialog for RecordingDialog {
    fn warning_ok(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn warning_yes_no(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// Control factory backed by in-memory widgets, keyed by control name
#[derive(Default)]
pub struct WidgetFactory {
    pub inputs: HashMap<&'static str, SpinBoxInput>,
    pub displays: HashMap<&'static str, LabelDisplay>,
}

impl WidgetFactory {
    /// Every control of every calibration page
    pub fn complete() -> Self {
        let mut factory = Self::default();
        for name in [
            nozzle_offset::INPUT,
            tool_offset::X_INPUT,
            tool_offset::Y_INPUT,
            tool_offset::Z_INPUT,
        ] {
            factory.inputs.insert(name, SpinBoxInput::new());
        }
        for name in [
            nozzle_offset::DISPLAY,
            tool_offset::X_DISPLAY,
            tool_offset::Y_DISPLAY,
            tool_offset::Z_DISPLAY,
        ] {
            factory.displays.insert(name, LabelDisplay::new());
        }
        factory
    }

    pub fn without(mut self, name: &str) -> Self {
        self.inputs.remove(name);
        self.displays.remove(name);
        self
    }

    pub fn input_handle(&self, name: &str) -> SpinBoxInput {
        self.inputs[name].clone()
    }

    pub fn display_handle(&self, name: &str) -> LabelDisplay {
        self.displays[name].clone()
    }

    pub fn type_into(&self, name: &str, text: &str) {
        self.inputs[name].set_raw(text);
    }

    pub fn shown(&self, name: &str) -> String {
        self.displays[name].text()
    }
}

impl ControlFactory for WidgetFactory {
    fn input(&self, _page: &str, name: &str) -> Option<Box<dyn OffsetInput>> {
        self.inputs
            .get(name)
            .map(|input| Box::new(input.clone()) as Box<dyn OffsetInput>)
    }

    fn display(&self, _page: &str, name: &str) -> Option<Box<dyn OffsetDisplay>> {
        self.displays
            .get(name)
            .map(|display| Box::new(display.clone()) as Box<dyn OffsetDisplay>)
    }
}
