#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;

    use ratatui::buffer::Buffer;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::{ApiRequest, ApiResponse};
    use crate::app::App;
    use crate::autocomplete::{AutocompleteState, HostForm};
    use crate::config::Config;
    use crate::field::FieldKind;

    pub const QUIET: Duration = Duration::from_millis(500);

    /// Autocomplete state wired to a channel the test can inspect
    pub fn state_with_channel() -> (AutocompleteState, UnboundedReceiver<ApiRequest>) {
        let (tx, rx) = unbounded_channel();
        let mut state = AutocompleteState::new(QUIET);
        state.set_request_channel(tx);
        (state, rx)
    }

    /// Host form that just stores what it is given
    #[derive(Debug, Default)]
    pub struct RecordingForm {
        pub title: String,
        pub author: String,
        pub publisher: String,
    }

    impl HostForm for RecordingForm {
        fn set_title(&mut self, value: &str) {
            self.title = value.to_string();
        }

        fn set_author(&mut self, value: &str) {
            self.author = value.to_string();
        }

        fn set_publisher(&mut self, value: &str) {
            self.publisher = value.to_string();
        }
    }

    /// App plus both ends of the worker channels, with no worker running
    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
    }

    impl TestApp {
        /// Open the dropdown for `kind` as if a lookup had returned `items`
        pub fn open_dropdown(&mut self, kind: FieldKind, items: &[&str]) {
            self.app.autocomplete.dispatch(kind, "q", 5);
            let request_id = self.app.autocomplete.current_request_id(kind);
            self.responses
                .send(ApiResponse::Suggestions {
                    kind,
                    request_id,
                    result: Ok(items.iter().map(|s| s.to_string()).collect()),
                })
                .unwrap();
            self.app.poll_responses();
            drain_requests(&mut self.requests);
        }
    }

    pub fn test_app() -> TestApp {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> TestApp {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        TestApp {
            app: App::new(config, request_tx, response_rx),
            requests,
            responses,
        }
    }

    /// Every request the app has sent so far
    pub fn drain_requests(rx: &mut UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    /// Flatten a render buffer into lines of text
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
