use docdex_content::Fragment;

#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Completed fragment resolution from a spawned resolver task. `token`
    /// echoes the selection that started the fetch so the app can drop
    /// completions for selections the user has already navigated away
    /// from.
    FragmentLoaded { token: u64, fragment: Fragment },
}
