pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --brand-purple: #7C3AED;
  --brand-purple-dark: #5B21B6;
  --brand-accent: #22D3EE;
  --brand-glow: rgba(124, 58, 237, 0.4);

  /* Surfaces, darkest first */
  --background: #050507;
  --surface: #0F0F11;
  --surface-raised: #1A1A1D;
  --surface-footer: #020203;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);

  /* Text */
  --text-primary: #FFFFFF;
  --text-secondary: #A1A1AA;
  --text-tertiary: #71717A;
  --text-brand: #C4B5FD;

  /* Semantic */
  --success: #4ADE80;
  --error: #F87171;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;
  --space-24: 6rem;

  /* Shape */
  --radius-md: 0.75rem;
  --radius-lg: 1rem;
  --radius-xl: 1.5rem;
  --radius-full: 9999px;

  /* Layout */
  --header-height: 5rem;
  --content-width: 80rem;

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
