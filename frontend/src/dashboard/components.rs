use crate::dashboard::progress::ProgressView;
use crate::models::{RunInfo, StatsSummary, Video};
use crate::utils::{format_count, format_duration_clock, format_run_started, ScoreBucket};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: StatsSummary,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let stats = &props.stats;
    let features = stats.feature_averages.clone().unwrap_or_default();

    let card = |label: &str, value: String| {
        html! {
            <div class="bg-gray-50 rounded-lg p-4 text-center">
                <div class="text-xs uppercase tracking-wider text-gray-500">{ label.to_string() }</div>
                <div class="text-2xl font-bold text-gray-800">{ value }</div>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            { card("Videos analyzed", stats.total.to_string()) }
            { card("Average score", format!("{:.1}", stats.avg_score)) }
            { card("Average length", format!("{:.0}", features.length)) }
            { card("Average emojis", format!("{:.2}", features.emojis)) }
            { card("Average hashtags", format!("{:.2}", features.hashtags)) }
            { card("Average exclamations", format!("{:.2}", features.exclamations)) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub rank: usize,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let bucket = ScoreBucket::of(video.score);

    let meta = |label: &str, value: String| {
        html! {
            <div class="flex flex-col">
                <span class="text-xs text-gray-500">{ label.to_string() }</span>
                <span class="text-sm text-gray-800">{ value }</span>
            </div>
        }
    };

    let feature = |label: &str, value: String| {
        html! {
            <div class="bg-gray-100 rounded p-2 text-center">
                <div class="text-sm font-semibold text-gray-800">{ value }</div>
                <div class="text-xs text-gray-500">{ label.to_string() }</div>
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow p-6 mb-4">
            <div class="flex justify-between items-start mb-4">
                <div class="flex-1">
                    <span class="text-gray-400 font-bold mr-2">{ format!("#{}", props.rank) }</span>
                    <span class="font-semibold text-gray-800">{ &video.title }</span>
                </div>
                <span class={format!("px-2 inline-flex text-sm leading-5 font-semibold rounded-full {}", bucket.badge_class())}>
                    { format!("{:.0}", video.score) }
                </span>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-4">
                { meta("Channel", video.channel.clone().unwrap_or_else(|| "Unknown".to_string())) }
                { meta("Views", format_count(video.views)) }
                { meta("Duration", format_duration_clock(video.duration.as_deref().unwrap_or("0"))) }
                { meta("Published", video.published.clone().unwrap_or_else(|| "N/A".to_string())) }
                { meta("Country", video.country.clone().unwrap_or_else(|| "World".to_string())) }
            </div>

            <div class="grid grid-cols-3 md:grid-cols-6 gap-2">
                { feature("Characters", video.features.length.to_string()) }
                { feature("Emojis", video.features.emoji_count.to_string()) }
                { feature("Hashtags", video.features.hashtag_count.to_string()) }
                { feature("Exclamations", video.features.exclamation_count.to_string()) }
                { feature("Questions", video.features.question_count.to_string()) }
                { feature("Uppercase", format!("{:.1}%", video.features.uppercase_percent)) }
            </div>

            {
                if let Some(url) = &video.url {
                    html! {
                        <div class="mt-4">
                            <a href={url.clone()} target="_blank" class="text-blue-600 hover:underline text-sm">
                                {"Watch the video"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<Video>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <div class="text-center text-gray-500 py-8">
                {"No videos available. Start a scraping run."}
            </div>
        };
    }

    html! {
        <div>
            {
                props.videos.iter().enumerate().map(|(index, video)| {
                    html! {
                        <VideoCard video={video.clone()} rank={index + 1} />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub title: String,
    pub detail: String,
    pub view: ProgressView,
    pub degraded: bool,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
            <div class="flex justify-between items-center mb-2">
                <span class="font-semibold text-gray-800">{ &props.title }</span>
                {
                    if props.degraded {
                        html! {
                            <span class="text-sm text-yellow-600">
                                {"Connection lost, retrying..."}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="text-sm text-gray-500 mb-3">{ &props.detail }</div>
            <div class="w-full bg-gray-200 rounded-full h-3">
                <div
                    class="bg-blue-600 h-3 rounded-full transition-all"
                    style={format!("width: {}%", props.view.percent)}
                />
            </div>
            <div class="text-sm text-gray-600 mt-2">{ &props.view.text }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressModalProps {
    pub view: ProgressView,
    pub on_close: Callback<()>,
}

#[function_component(ProgressModal)]
pub fn progress_modal(props: &ProgressModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center z-40">
            <div class="bg-white rounded-lg shadow-lg p-8 w-full max-w-md">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-xl font-bold text-gray-800">{"Scraping progress"}</h2>
                    <button onclick={on_close} class="text-gray-400 hover:text-gray-700 font-bold">
                        {"×"}
                    </button>
                </div>
                <div class="w-full bg-gray-200 rounded-full h-4 mb-3">
                    <div
                        class="bg-blue-600 h-4 rounded-full transition-all"
                        style={format!("width: {}%", props.view.percent)}
                    />
                </div>
                <div class="text-sm text-gray-600">{ &props.view.text }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogPanelProps {
    pub lines: Vec<String>,
    pub download_url: String,
}

#[function_component(LogPanel)]
pub fn log_panel(props: &LogPanelProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
            <div class="flex justify-between items-center mb-3">
                <h2 class="text-lg font-semibold text-gray-800">{"Run logs"}</h2>
                <a href={props.download_url.clone()} class="text-blue-600 hover:underline text-sm">
                    {"Download logs"}
                </a>
            </div>
            <div id="log-scroll" class="bg-gray-900 text-gray-100 rounded p-4 h-64 overflow-y-auto font-mono text-xs">
                <pre class="whitespace-pre-wrap">{ props.lines.join("\n") }</pre>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RunsPanelProps {
    pub runs: Vec<RunInfo>,
    pub on_view: Callback<String>,
    pub on_refresh: Callback<()>,
}

#[function_component(RunsPanel)]
pub fn runs_panel(props: &RunsPanelProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
            <div class="flex justify-between items-center mb-3">
                <h2 class="text-lg font-semibold text-gray-800">{"Past runs"}</h2>
                <button onclick={on_refresh} class="text-blue-600 hover:underline text-sm">
                    {"Refresh"}
                </button>
            </div>
            {
                if props.runs.is_empty() {
                    html! {
                        <div class="text-gray-500 text-sm">{"No runs available"}</div>
                    }
                } else {
                    html! {
                        <div class="flex flex-wrap gap-3">
                            {
                                props.runs.iter().map(|run| {
                                    let run_id = run.id.clone();
                                    let on_view = props.on_view.clone();
                                    html! {
                                        <div key={run.id.clone()} class="border border-gray-200 rounded-lg p-3 min-w-52 bg-white">
                                            <div class="font-semibold text-gray-800 text-sm">{ &run.id }</div>
                                            <div class="text-xs text-gray-500">
                                                { run.started_at.as_deref().map(format_run_started).unwrap_or_default() }
                                            </div>
                                            <button
                                                onclick={Callback::from(move |_| on_view.emit(run_id.clone()))}
                                                class="mt-2 px-3 py-1 bg-blue-600 text-white text-xs rounded hover:bg-blue-700"
                                            >
                                                {"View logs"}
                                            </button>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TokenDialogProps {
    pub on_save: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(TokenDialog)]
pub fn token_dialog(props: &TokenDialogProps) -> Html {
    let token_input = use_state(String::new);

    let on_input = {
        let token_input = token_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            token_input.set(input_value);
        })
    };

    let on_submit = {
        let token_input = token_input.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_save.emit((*token_input).clone());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center z-40">
            <div class="bg-white rounded-lg shadow-lg p-8 w-full max-w-md">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-xl font-bold text-gray-800">{"Scrape token"}</h2>
                    <button onclick={on_close} class="text-gray-400 hover:text-gray-700 font-bold">
                        {"×"}
                    </button>
                </div>
                <p class="text-sm text-gray-500 mb-4">
                    {"Stored locally and sent as X-Scrape-Token on protected scrape requests."}
                </p>
                <form onsubmit={on_submit} class="flex gap-3">
                    <input
                        type="password"
                        class="flex-grow px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="Enter token"
                        value={(*token_input).clone()}
                        oninput={on_input}
                    />
                    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">
                        {"Save"}
                    </button>
                </form>
                <button onclick={on_clear} class="mt-3 text-sm text-red-600 hover:underline">
                    {"Clear stored token"}
                </button>
            </div>
        </div>
    }
}
