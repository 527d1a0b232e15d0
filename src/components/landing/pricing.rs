//! Pricing table with a monthly/yearly billing switch.

use leptos::prelude::*;

use super::reveal::Reveal;
use super::tilt::TiltCard;
use super::types::Plan;

/// Billing period currently displayed for every plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
	#[default]
	Monthly,
	Yearly,
}

impl BillingPeriod {
	pub fn toggled(self) -> Self {
		match self {
			Self::Monthly => Self::Yearly,
			Self::Yearly => Self::Monthly,
		}
	}

	/// CSS `display` value for a price element belonging to `period`.
	pub fn display_for(self, period: BillingPeriod) -> &'static str {
		if self == period { "inline" } else { "none" }
	}
}

/// Pricing section body: the billing toggle followed by one card per plan.
#[component]
pub fn Pricing(plans: Vec<Plan>) -> impl IntoView {
	let (period, set_period) = signal(BillingPeriod::default());
	let yearly = move || period.get() == BillingPeriod::Yearly;

	let cards = plans
		.into_iter()
		.enumerate()
		.map(|(index, plan)| {
			let features = plan
				.features
				.into_iter()
				.map(|feature| view! { <li>{feature}</li> })
				.collect_view();
			let delay = index as u32 * 100;
			let class = if plan.highlighted { "pricing-card featured" } else { "pricing-card" };
			view! {
				<Reveal delay_ms=delay>
					<TiltCard class=class>
						<h3 class="plan-name">{plan.name}</h3>
						<div class="plan-price">
							<span
								class="monthly-price"
								style:display=move || period.get().display_for(BillingPeriod::Monthly)
							>
								{plan.monthly}
							</span>
							<span
								class="yearly-price"
								style:display=move || period.get().display_for(BillingPeriod::Yearly)
							>
								{plan.yearly}
							</span>
						</div>
						<ul class="plan-features">{features}</ul>
					</TiltCard>
				</Reveal>
			}
		})
		.collect_view();

	view! {
		<div class="pricing-toggle-row">
			<span id="monthlyLabel" class:active=move || !yearly()>"Monthly"</span>
			<button
				id="pricingToggle"
				class="pricing-toggle"
				class:active=yearly
				aria-pressed=move || yearly().to_string()
				on:click=move |_| set_period.update(|p| *p = p.toggled())
			>
				<span class="toggle-knob"></span>
			</button>
			<span id="yearlyLabel" class:active=yearly>"Yearly"</span>
		</div>
		<div class="pricing-grid">{cards}</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn even_number_of_toggles_restores_period() {
		let start = BillingPeriod::default();
		assert_eq!(start, BillingPeriod::Monthly);
		assert_eq!(start.toggled(), BillingPeriod::Yearly);
		assert_eq!(start.toggled().toggled(), start);

		let mut period = start;
		for _ in 0..10 {
			period = period.toggled();
		}
		assert_eq!(period, start);
	}

	#[test]
	fn exactly_one_price_group_is_shown() {
		for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
			let shown = [BillingPeriod::Monthly, BillingPeriod::Yearly]
				.into_iter()
				.filter(|&group| period.display_for(group) == "inline")
				.count();
			assert_eq!(shown, 1);
		}
		assert_eq!(BillingPeriod::Yearly.display_for(BillingPeriod::Monthly), "none");
	}
}
