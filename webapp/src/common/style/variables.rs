pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --accent: #FACC15;           /* yellow-400, links and calls to action */
  --accent-light: #FDE047;     /* yellow-300, hover */
  --accent-dark: #CA8A04;      /* yellow-600, gradient end */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Light treatment */
  --background: var(--neutral-50);
  --surface: var(--neutral-100);
  --strip: var(--neutral-200);
  --nav-scrolled: rgba(255, 255, 255, 0.8);
  --menu: rgba(255, 255, 255, 0.9);
  --toggle-hover: var(--neutral-200);
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-500);
  --text-muted: var(--neutral-400);

  /* Layout */
  --header-height: 72px;
  --content-width: 1024px;
  --nav-width: 1280px;

  /* Spacing System */
  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-20: 80px;
  --space-24: 96px;
  --space-32: 128px;

  /* Border Radius */
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-theme: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --marquee-duration: 20s;
}"#;

// dark treatment, keyed on the root marker class
//
// {marker} is substituted with the configured class name
pub const DARK_VARIABLES: &str = r#"
:root.{marker} {
  --background: linear-gradient(to bottom right, #000000, var(--neutral-900), #000000);
  --surface: var(--neutral-800);
  --strip: var(--neutral-800);
  --nav-scrolled: rgba(0, 0, 0, 0.8);
  --menu: rgba(0, 0, 0, 0.9);
  --toggle-hover: var(--neutral-700);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
}"#;
