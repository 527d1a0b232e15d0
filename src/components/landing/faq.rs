//! FAQ accordion where at most one answer is expanded.

use leptos::prelude::*;

use super::types::FaqEntry;

/// Which item of the accordion, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
	open: Option<usize>,
}

impl AccordionState {
	/// Clicking a closed item opens it and closes every other item; clicking
	/// the open item closes it.
	pub fn toggle(self, index: usize) -> Self {
		let open = match self.open {
			Some(current) if current == index => None,
			_ => Some(index),
		};
		Self { open }
	}

	pub fn is_open(self, index: usize) -> bool {
		self.open == Some(index)
	}

	pub fn open_item(self) -> Option<usize> {
		self.open
	}
}

/// The FAQ list.
#[component]
pub fn Faq(entries: Vec<FaqEntry>) -> impl IntoView {
	let (state, set_state) = signal(AccordionState::default());

	let items = entries
		.into_iter()
		.enumerate()
		.map(|(index, entry)| {
			let open = move || state.get().is_open(index);
			view! {
				<div class="faq-item" class:active=open>
					<button
						class="faq-question"
						aria-expanded=move || open().to_string()
						on:click=move |_| set_state.update(|s| *s = s.toggle(index))
					>
						<span>{entry.question}</span>
						<span class="faq-icon" aria-hidden="true">"+"</span>
					</button>
					<div class="faq-answer">
						<p>{entry.answer}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	view! { <div class="faq-list">{items}</div> }
}
