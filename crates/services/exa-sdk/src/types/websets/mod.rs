//! Types for the websets API (`/websets/v0`)

/// Enrichment types
pub mod enrichment;
/// Entity and criteria types
pub mod entity;
/// Event types
pub mod event;
/// Import types
pub mod import;
/// Item types
pub mod item;
/// Monitor types
pub mod monitor;
/// Cadence, behavior and run types
pub mod schedule;
/// Webset search types
pub mod search;
/// Stream types
pub mod stream;
/// Webhook types
pub mod webhook;
/// Webset types
pub mod webset;

pub use enrichment::{
    CreateEnrichmentParams, CreateEnrichmentParamsBuilder, CreateEnrichmentParamsBuilderError,
    EnrichmentFormat, EnrichmentOption, EnrichmentStatus, UpdateEnrichmentParams,
    WebsetEnrichment,
};
pub use entity::{Criterion, WebsetEntity};
pub use event::Event;
pub use import::{
    CreateImportParams, CreateImportParamsBuilder, CreateImportParamsBuilderError,
    CsvImportConfig, Import, ImportFormat, ImportStatus, UpdateImportParams,
};
pub use item::{
    EnrichmentResult, Evaluation, ItemProperties, ItemSource, ListItemsParams, Reference,
    Satisfied, WebsetItem,
};
pub use monitor::{
    CreateMonitorParams, CreateMonitorParamsBuilder, CreateMonitorParamsBuilderError,
    ListMonitorsParams, Monitor, MonitorStatus, UpdateMonitorParams,
};
pub use schedule::{
    Cadence, EnrichmentSelection, RefreshConfig, RefreshTarget, Run, RunStatus, ScheduleBehavior,
    ScheduledSearchConfig,
};
pub use search::{
    CancelSearchParams, CreateWebsetSearchParams, CreateWebsetSearchParamsBuilder,
    CreateWebsetSearchParamsBuilderError, SearchBehavior, SearchProgress, WebsetSearch,
    WebsetSearchStatus,
};
pub use stream::{
    CreateStreamParams, CreateStreamParamsBuilder, CreateStreamParamsBuilderError,
    ListStreamsParams, StreamStatus, UpdateStreamParams, WebsetStream,
};
pub use webhook::{
    CreateWebhookParams, CreateWebhookParamsBuilder, CreateWebhookParamsBuilderError, EventType,
    ListAttemptsParams, UpdateWebhookParams, Webhook, WebhookAttempt, WebhookStatus,
};
pub use webset::{
    CreateWebsetParams, CreateWebsetParamsBuilder, CreateWebsetParamsBuilderError,
    PreviewSearch, PreviewSearchResult, PreviewWebsetParams, PreviewWebsetResponse, SourceKind,
    SourceRef, SuggestedEnrichment, UpdateWebsetParams, Webset, WebsetStatus,
};
