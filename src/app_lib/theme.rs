//! Tailwind class constants shared by the auth page components.

pub struct Theme;

impl Theme {
    /// Primary action button; dims while a provider call is pending.
    pub const BUTTON_PRIMARY: &'static str = "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800";

    /// Secondary action rendered as a text link.
    pub const BUTTON_LINK: &'static str = "text-sm font-medium text-blue-600 hover:underline dark:text-blue-500";

    /// Text inputs of the credential form.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Card holding the auth panel.
    pub const CARD: &'static str = "w-full max-w-sm p-6 bg-white border border-gray-200 rounded-lg shadow dark:bg-gray-800 dark:border-gray-700";
}
