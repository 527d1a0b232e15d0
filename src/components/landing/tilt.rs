//! 3D hover tilt for cards.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::config::Settings;

/// Rotation (degrees) applied to a card under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
}

impl Tilt {
	/// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` card.
	///
	/// The card leans away from the pointer by one degree per `divisor`
	/// pixels of offset from its centre.
	pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
		if divisor <= 0.0 {
			return Self::default();
		}
		let (center_x, center_y) = (width / 2.0, height / 2.0);
		Self {
			rotate_x: (y - center_y) / divisor,
			rotate_y: (center_x - x) / divisor,
		}
	}

	pub fn to_css(self, perspective: f64, lift: f64) -> String {
		format!(
			"perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
			perspective, self.rotate_x, self.rotate_y, lift
		)
	}
}

/// A card that tilts toward the pointer and settles when it leaves.
#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
	let settings = use_context::<Settings>().unwrap_or_default();
	let (divisor, perspective, lift) = (
		settings.tilt_divisor,
		settings.tilt_perspective,
		settings.tilt_lift,
	);
	let node = NodeRef::<leptos::html::Div>::new();
	let (transform, set_transform) = signal(String::new());

	let on_move = move |ev: MouseEvent| {
		let Some(card) = node.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		let tilt = Tilt::from_pointer(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
			divisor,
		);
		set_transform.set(tilt.to_css(perspective, lift));
	};

	view! {
		<div
			node_ref=node
			class=class
			style:transform=move || transform.get()
			on:mousemove=on_move
			on:mouseleave=move |_| set_transform.set(String::new())
		>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centre_is_flat() {
		let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0, 20.0);
		assert_eq!(tilt, Tilt::default());
	}

	#[test]
	fn corners_lean_away_from_pointer() {
		// Top-left corner: tips back on X, turns left on Y.
		let tilt = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, 20.0);
		assert_eq!(tilt.rotate_x, -5.0);
		assert_eq!(tilt.rotate_y, 7.5);

		let tilt = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0, 20.0);
		assert_eq!(tilt.rotate_x, 5.0);
		assert_eq!(tilt.rotate_y, -7.5);
	}

	#[test]
	fn non_positive_divisor_disables_tilt() {
		assert_eq!(Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, 0.0), Tilt::default());
	}

	#[test]
	fn css_transform() {
		let tilt = Tilt {
			rotate_x: -5.0,
			rotate_y: 7.5,
		};
		assert_eq!(
			tilt.to_css(1000.0, 5.0),
			"perspective(1000px) rotateX(-5deg) rotateY(7.5deg) translateY(-5px)"
		);
	}
}
