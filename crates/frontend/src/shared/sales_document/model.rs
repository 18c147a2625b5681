use contracts::domain::common::{filter_by_date, find_by_id, SalesDocument};
use contracts::shared::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::*;

use super::table::{DocumentLinesModal, DocumentTable, DocumentTableState};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::document_tab_key;
use crate::shared::api_utils::{get_blob, get_json, post_json_unit, ApiError};
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::notice::{Notice, NoticeHandle};
use crate::shared::download::download_blob;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub async fn fetch_documents<T: SalesDocument + DeserializeOwned>() -> Result<Vec<T>, ApiError> {
    get_json(T::kind().endpoint()).await
}

pub async fn download_pdf<T: SalesDocument>(doc: &T) -> Result<(), ApiError> {
    let blob = get_blob(&doc.pdf_path()).await?;
    download_blob(&blob, &doc.pdf_filename())
}

/// State of one sales-document list.
pub struct DocumentListModel<T: Send + Sync + 'static> {
    pub documents: RwSignal<Vec<T>>,
    pub table: DocumentTableState,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub loading: RwSignal<bool>,
    /// A conversion or download is in flight.
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub lines_of: RwSignal<Option<T>>,
    pub notice: NoticeHandle,
    tabs_store: Option<AppGlobalContext>,
}

impl<T: Send + Sync + 'static> Clone for DocumentListModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DocumentListModel<T> {}

impl<T> DocumentListModel<T>
where
    T: SalesDocument + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    /// Loads at once and again whenever the tab store asks this list to
    /// reload (after a conversion into it, or an offer save).
    pub fn new() -> Self {
        let model = Self {
            documents: RwSignal::new(Vec::new()),
            table: DocumentTableState::new(),
            start: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            lines_of: RwSignal::new(None),
            notice: NoticeHandle::new(),
            tabs_store: use_context::<AppGlobalContext>(),
        };
        let key = document_tab_key(T::kind());
        // Refetch only when this list's own counter changes.
        let token = Memo::new(move |_| model.tabs_store.map(|ctx| ctx.reload_token(key)));
        Effect::new(move |_| {
            token.track();
            model.load();
        });
        model
    }

    pub fn load(&self) {
        let model = *self;
        model.loading.set(true);
        model.error.set(None);
        spawn_local(async move {
            match fetch_documents::<T>().await {
                Ok(docs) => {
                    log::debug!("Loaded {} {} rows", docs.len(), T::kind().label());
                    model.documents.try_set(docs);
                }
                Err(e) => {
                    model.error.try_set(Some(format!(
                        "No se pudieron cargar los documentos ({}): {}",
                        T::kind().label(),
                        e
                    )));
                }
            }
            model.loading.try_set(false);
        });
    }

    /// Rows inside the date filter.
    pub fn visible(&self) -> Signal<Vec<T>> {
        let model = *self;
        Signal::derive(move || {
            let range = DateRange::from_inputs(&model.start.get(), &model.end.get());
            model.documents.with(|docs| filter_by_date(docs, &range))
        })
    }

    pub fn selected(&self) -> Option<T> {
        let id = self.table.selected.get()?;
        self.documents.with(|docs| find_by_id(docs, &id).cloned())
    }

    /// Action buttons are disabled without a selection or while busy.
    pub fn actions_disabled(&self) -> Signal<bool> {
        let model = *self;
        Signal::derive(move || model.busy.get() || model.selected().is_none())
    }

    /// Post the conversion of the selected document into the next kind.
    pub fn convert_selected<R>(
        &self,
        request: impl FnOnce(&T) -> R,
        success: &'static str,
        failure: &'static str,
    ) where
        R: Serialize + 'static,
    {
        let Some(next) = T::kind().next() else {
            return;
        };
        let Some(doc) = self.selected_untracked() else {
            return;
        };
        let body = request(&doc);
        let model = *self;
        model.busy.set(true);
        spawn_local(async move {
            match post_json_unit(next.endpoint(), &body).await {
                Ok(()) => {
                    log::info!("{} {} converted into {}", T::kind().label(), doc.id(), next.label());
                    model.notice.success(success);
                    if let Some(ctx) = model.tabs_store {
                        ctx.request_reload(document_tab_key(next));
                    }
                }
                Err(e) => {
                    log::warn!("Converting {} {} failed: {}", T::kind().label(), doc.id(), e);
                    model.notice.error(failure);
                }
            }
            model.busy.try_set(false);
        });
    }

    pub fn download_selected_pdf(&self, failure: &'static str) {
        let Some(doc) = self.selected_untracked() else {
            return;
        };
        let model = *self;
        model.busy.set(true);
        spawn_local(async move {
            if let Err(e) = download_pdf(&doc).await {
                log::warn!("PDF of {} {} failed: {}", T::kind().label(), doc.id(), e);
                model.notice.error(failure);
            }
            model.busy.try_set(false);
        });
    }

    fn selected_untracked(&self) -> Option<T> {
        let id = self.table.selected.get_untracked()?;
        self.documents
            .with_untracked(|docs| find_by_id(docs, &id).cloned())
    }
}

/// Page around a document list: title, count, `children` as the action
/// buttons, then notice, date filter, table and lines modal.
#[component]
pub fn DocumentListPage<T>(
    model: DocumentListModel<T>,
    title: &'static str,
    page_id: &'static str,
    children: Children,
) -> impl IntoView
where
    T: SalesDocument + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    let rows = model.visible();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>{move || rows.with(|r| r.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    {children()}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| model.load()
                        disabled=Signal::derive(move || model.loading.get())
                    >
                        {icon("refresh")}
                        {move || if model.loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Notice handle=model.notice />
                {move || model.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <DateRangeFilter start=model.start end=model.end />
                    </div>
                </div>

                <DocumentTable
                    rows=rows
                    state=model.table
                    on_show_lines=Callback::new(move |doc: T| model.lines_of.set(Some(doc)))
                />
            </div>

            {move || model.lines_of.get().map(|doc| view! {
                <DocumentLinesModal
                    title=format!("Productos de {} {}", T::kind().label().to_lowercase(), doc.id())
                    lines=doc.lines().to_vec()
                    on_close=Callback::new(move |_| model.lines_of.set(None))
                />
            })}
        </PageFrame>
    }
}
