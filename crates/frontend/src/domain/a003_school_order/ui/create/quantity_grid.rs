//! Quantity grid: one table per uniform bundle, one column per size

use super::view_model::OrderCreateVm;
use contracts::domain::a003_school_order::{BundleKey, FieldKey, QuantityKey, UniformBundle};
use leptos::prelude::*;

#[component]
fn BundleGrid(vm: OrderCreateVm, bundle: UniformBundle) -> impl IntoView {
    let key: BundleKey = bundle.key;
    let error = vm.error_for(FieldKey::Uniform(key));
    let columns = vm.catalog.with_untracked(|c| c.columns_for(&bundle));
    let hints: Vec<Option<String>> = columns
        .iter()
        .map(|label| {
            vm.catalog.with_untracked(|c| {
                bundle
                    .items()
                    .find_map(|item| c.find(item.garment_type, item.gender, label))
                    .and_then(|entry| entry.measurement_hint())
            })
        })
        .collect();
    let bundle_total = move || vm.form.with(|f| f.bundle_total(&key));

    view! {
        <div class="bundle-grid" id=FieldKey::Uniform(key).name()>
            <div class="bundle-grid__title">{bundle.title()}</div>
            {if columns.is_empty() {
                view! { <div class="muted">"No sizes available for this uniform"</div> }.into_any()
            } else {
                view! {
                    <table class="table__data">
                        <thead>
                            <tr>
                                {columns
                                    .iter()
                                    .zip(hints)
                                    .map(|(label, hint)| {
                                        view! {
                                            <th title=hint.unwrap_or_default()>{label.clone()}</th>
                                        }
                                    })
                                    .collect_view()}
                                <th class="text-right">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                {columns
                                    .iter()
                                    .map(|label| {
                                        let size = label.clone();
                                        let size_for_value = label.clone();
                                        let cell_id = QuantityKey::new(key, label.clone()).as_string();
                                        view! {
                                            <td>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="1"
                                                    id=cell_id
                                                    prop:value=move || {
                                                        let q = vm.form.with(|f| f.quantity(key, &size_for_value));
                                                        if q == 0 { String::new() } else { q.to_string() }
                                                    }
                                                    on:input=move |ev| {
                                                        vm.set_quantity(key, &size, &event_target_value(&ev));
                                                    }
                                                />
                                            </td>
                                        }
                                    })
                                    .collect_view()}
                                <td class="text-right">{bundle_total}</td>
                            </tr>
                        </tbody>
                    </table>
                }
                .into_any()
            }}
            {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn QuantityGrid(vm: OrderCreateVm) -> impl IntoView {
    let design_id = Memo::new(move |_| vm.form.with(|f| f.delivery().map(|d| d.delivery_id)));

    view! {
        <div class="quantity-grid">
            {move || {
                // rebuild only when the design or the catalog changes
                design_id.track();
                vm.catalog.track();
                let bundles: Vec<UniformBundle> = vm
                    .form
                    .with_untracked(|f| f.bundles().values().cloned().collect());
                if bundles.is_empty() {
                    return view! { <div class="muted">"This design has no garments to order"</div> }
                        .into_any();
                }
                bundles
                    .into_iter()
                    .map(|bundle| view! { <BundleGrid vm=vm bundle=bundle /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
