//! Voice search
//!
//! [`VoiceCapture`] is the one-shot capture state shared by the search pages:
//! a session starts with an empty transcript, recognition results replace the
//! transcript, and when recognition ends a non-empty transcript overwrites the
//! query field. [`SpeechSession`] drives the browser's Web Speech API.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCapture {
    listening: bool,
    transcript: String,
}

impl VoiceCapture {
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Begin a new session, discarding any previous transcript
    pub fn start(&mut self) {
        self.transcript.clear();
        self.listening = true;
    }

    pub fn on_transcript(&mut self, text: impl Into<String>) {
        self.transcript = text.into();
    }

    /// Recognition stopped; returns the text that should replace the query
    pub fn on_end(&mut self) -> Option<String> {
        self.listening = false;
        (!self.transcript.trim().is_empty()).then(|| self.transcript.clone())
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    type SpeechRecognition;

    #[wasm_bindgen(method, setter)]
    fn set_continuous(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter)]
    fn set_lang(this: &SpeechRecognition, value: &str);

    #[wasm_bindgen(method, setter)]
    fn set_onresult(this: &SpeechRecognition, value: Option<&Function>);

    #[wasm_bindgen(method, setter)]
    fn set_onend(this: &SpeechRecognition, value: Option<&Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn abort(this: &SpeechRecognition);
}

fn recognition_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .find_map(|name| {
            Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .filter(|ctor| ctor.is_function())
                .map(|ctor| ctor.unchecked_into::<Function>())
        })
}

/// Whether this browser exposes speech recognition at all
pub fn is_supported() -> bool {
    recognition_constructor().is_some()
}

/// Concatenate the best alternative of every result in a `SpeechRecognitionEvent`
fn transcript_from_event(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let length = Reflect::get(&results, &JsValue::from_str("length"))
        .ok()?
        .as_f64()? as u32;

    let mut transcript = String::new();
    for i in 0..length {
        let best = Reflect::get_u32(&results, i)
            .and_then(|result| Reflect::get_u32(&result, 0))
            .and_then(|alt| Reflect::get(&alt, &JsValue::from_str("transcript")));
        if let Some(text) = best.ok().and_then(|t| t.as_string()) {
            transcript.push_str(&text);
        }
    }
    Some(transcript)
}

/// A running, non-continuous recognition session.
///
/// Dropping the session aborts recognition and releases the callbacks.
pub struct SpeechSession {
    recognition: SpeechRecognition,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut()>,
}

impl SpeechSession {
    pub fn start(
        locale: &str,
        mut on_transcript: impl FnMut(String) + 'static,
        mut on_end: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let ctor = recognition_constructor()
            .ok_or_else(|| JsValue::from_str("speech recognition is not supported"))?;
        let recognition: SpeechRecognition = Reflect::construct(&ctor, &Array::new())?.unchecked_into();

        recognition.set_continuous(false);
        recognition.set_interim_results(true);
        recognition.set_lang(locale);

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(text) = transcript_from_event(&event) {
                on_transcript(text);
            }
        });
        let on_end_cb = Closure::<dyn FnMut()>::new(move || on_end());

        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognition.set_onend(Some(on_end_cb.as_ref().unchecked_ref()));
        recognition.start()?;

        Ok(Self {
            recognition,
            _on_result: on_result,
            _on_end: on_end_cb,
        })
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        self.recognition.set_onresult(None);
        self.recognition.set_onend(None);
        self.recognition.abort();
    }
}
