// light values live on :root; the dark class on <html> overrides them, so
// components only ever reference the variables
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #0EA5E9;          /* Sky blue brand color */
  --primary-light: #38BDF8;
  --primary-dark: #0284C7;
  --accent: #F59E0B;           /* Signal amber for calls to action */

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-400: #94A3B8;
  --neutral-500: #64748B;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-raised: #FFFFFF;
  --surface-muted: var(--neutral-100);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 70px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 350ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

:root.dark {
  --background: #0B1120;
  --surface: var(--neutral-900);
  --surface-raised: var(--neutral-800);
  --surface-muted: #111B2E;

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.6);
}"#;
