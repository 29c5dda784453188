use crate::api::{ApiClient, ApiError, DashboardSummary};
use crate::pages::dashboard::repository::DashboardRepository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary_resource: Resource<u32, Result<DashboardSummary, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(DashboardRepository::new(api));
        let reload = create_rw_signal(0u32);

        let summary_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_summary().await }
            },
        );

        Self {
            summary_resource,
            reload,
        }
    }

    pub fn summary(&self) -> Signal<Option<Result<DashboardSummary, ApiError>>> {
        let resource = self.summary_resource;
        Signal::derive(move || resource.get())
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
