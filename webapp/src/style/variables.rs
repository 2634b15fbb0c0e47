// design tokens, scoped to the site root so the theme class can swap the
// palette without touching :root
pub const CSS_VARIABLES: &str = r#"
.site-root {
  /* Color System */
  --primary: #3B82F6;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #2563EB;     /* Darker blue for active states */
  --accent: #8B5CF6;           /* Purple accent for highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;
  --surface-raised: var(--neutral-50);
  --hero-wash: #EFF6FF;
  --chip-bg: var(--neutral-50);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

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

/* Dark palette overrides */
.site-root.theme-dark {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-raised: var(--neutral-700);
  --hero-wash: #1E2A4A;
  --chip-bg: var(--neutral-800);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5), 0 2px 4px -1px rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.4);
}
"#;
