//! Global CSS styles for the Gym Coach desktop app.
//!
//! Dark glass surfaces with a neon green accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #0b0d12;
  --ink-raised: #12151c;
  --ink-border: rgba(255, 255, 255, 0.08);
  --glass: rgba(255, 255, 255, 0.04);
  --glass-strong: rgba(18, 21, 28, 0.85);

  /* NEON (Primary) */
  --neon: #39ff88;
  --neon-soft: rgba(57, 255, 136, 0.15);
  --neon-glow: 0 0 24px rgba(57, 255, 136, 0.35);

  /* TEXT */
  --text-primary: #f2f4f8;
  --text-secondary: rgba(242, 244, 248, 0.7);
  --text-muted: rgba(242, 244, 248, 0.45);

  /* SEMANTIC */
  --warning: #ff9f40;
  --danger: #ff4d6d;

  /* Typography */
  --font-heading: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, sans-serif;

  --radius: 16px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --navbar-height: 64px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 15px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

h1, h2, h3, h4 {
  font-family: var(--font-heading);
  line-height: 1.15;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  padding-top: var(--navbar-height);
}

.page {
  max-width: 1040px;
  margin: 0 auto;
  padding: 2.5rem 1.25rem 6rem;
}

.page-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.page-icon {
  width: 40px;
  height: 40px;
  border-radius: 12px;
  background: var(--neon-soft);
  color: var(--neon);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.2rem;
}

.page-title {
  font-size: 1.6rem;
  font-weight: 700;
}

.page-subtitle {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.glass {
  background: var(--glass);
  border: 1px solid var(--ink-border);
  border-radius: var(--radius);
  backdrop-filter: blur(12px);
}

.panel {
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.grid-2 {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.25rem;
}

.button-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--navbar-height);
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  background: var(--glass-strong);
  border-bottom: 1px solid var(--ink-border);
  backdrop-filter: blur(16px);
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: 1.05rem;
}

.navbar-logo {
  width: 34px;
  height: 34px;
  border-radius: 10px;
  background: var(--neon-soft);
  color: var(--neon);
  display: flex;
  align-items: center;
  justify-content: center;
}

.navbar-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.5rem 0.9rem;
  border-radius: 10px;
  color: var(--text-muted);
  font-size: 0.875rem;
  font-weight: 500;
  transition: var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
  background: var(--glass);
}

.nav-link.active {
  color: var(--neon);
  background: var(--neon-soft);
}

.navbar-user {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .btn-danger {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1.4rem;
  border-radius: 12px;
  font-family: var(--font-body);
  font-size: 0.9rem;
  font-weight: 600;
  cursor: pointer;
  border: 1px solid transparent;
  transition: var(--transition-fast);
}

.btn-primary {
  background: var(--neon);
  color: var(--ink);
  box-shadow: var(--neon-glow);
}

.btn-outline {
  background: var(--glass);
  color: var(--text-primary);
  border-color: var(--ink-border);
}

.btn-ghost {
  background: transparent;
  color: var(--text-muted);
}

.btn-danger {
  background: transparent;
  color: var(--danger);
  border-color: rgba(255, 77, 109, 0.4);
}

.btn-primary:hover:not(:disabled),
.btn-outline:hover:not(:disabled),
.btn-danger:hover:not(:disabled) {
  transform: translateY(-1px);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
  padding: 0.4rem;
  border-radius: 8px;
  font-size: 1rem;
}

.icon-btn:hover {
  color: var(--text-primary);
  background: var(--glass);
}

.spinner {
  width: 14px;
  height: 14px;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.spinner-lg {
  width: 40px;
  height: 40px;
  border-width: 3px;
  color: var(--neon);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
}

.input-label {
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.input-hint {
  color: var(--text-muted);
  font-weight: 400;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--ink-border);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 0.95rem;
  outline: none;
  transition: var(--transition-fast);
}

.input-field:focus {
  border-color: var(--neon);
  box-shadow: 0 0 0 3px var(--neon-soft);
}

.textarea {
  resize: vertical;
}

/* === Uploaders === */
.uploader-label {
  display: block;
  font-size: 0.85rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.dropzone {
  border: 2px dashed var(--ink-border);
  border-radius: 14px;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  cursor: pointer;
  text-align: center;
  transition: var(--transition-fast);
}

.dropzone:hover {
  border-color: rgba(57, 255, 136, 0.5);
  background: var(--glass);
}

.dropzone.drag-over {
  border-color: var(--neon);
  background: var(--neon-soft);
  box-shadow: var(--neon-glow);
}

.dropzone-icon {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  background: var(--neon-soft);
  color: var(--neon);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.3rem;
}

.dropzone-hint {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.upload-preview {
  position: relative;
  overflow: hidden;
}

.upload-preview video,
.upload-preview img {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: contain;
  background: rgba(0, 0, 0, 0.5);
  display: block;
}

.upload-preview .remove-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 32px;
  height: 32px;
  border-radius: 50%;
  border: none;
  background: rgba(255, 77, 109, 0.8);
  color: white;
  cursor: pointer;
}

.upload-meta {
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.upload-meta .size {
  margin-left: auto;
}

.upload-error {
  color: var(--danger);
  font-size: 0.8rem;
  margin-top: 0.4rem;
}

/* === Progress === */
.loading-panel {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem;
}

.progress-track {
  width: 100%;
  max-width: 320px;
  height: 8px;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.08);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--neon);
  border-radius: 999px;
  transition: width var(--transition-normal);
}

/* === Results === */
.summary-text {
  margin-bottom: 1rem;
}

.detail-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.detail-list strong {
  color: var(--text-primary);
}

.frame-card {
  padding: 1.25rem;
  transition: var(--transition-fast);
}

.frame-card:hover {
  transform: translateY(-2px);
}

.frame-card-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.frame-card-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.frame-images {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.frame-image {
  border-radius: 10px;
  overflow: hidden;
  border: 1px solid var(--ink-border);
}

.frame-image p {
  font-size: 0.65rem;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--text-muted);
  padding: 0.25rem 0.5rem;
  background: rgba(255, 255, 255, 0.04);
}

.frame-image img {
  width: 100%;
  display: block;
  object-fit: cover;
}

.frame-feedback {
  font-size: 0.875rem;
  border-left: 2px solid var(--warning);
  padding-left: 0.6rem;
  margin-bottom: 0.6rem;
}

.frame-observation {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(11, 13, 18, 0.8);
  backdrop-filter: blur(6px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.modal {
  background: var(--glass-strong);
  border: 1px solid var(--ink-border);
  border-radius: 20px;
  padding: 1.5rem;
  max-width: 900px;
  width: 100%;
  max-height: 90vh;
  overflow: auto;
}

/* === Score gauge === */
.score-gauge {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.score-gauge-track {
  stroke: rgba(255, 255, 255, 0.1);
}

.score-gauge-value {
  transition: stroke-dashoffset var(--transition-normal);
}

.score-gauge-label {
  position: absolute;
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: 0.9rem;
}

.score-good .score-gauge-label { color: var(--neon); }
.score-fair .score-gauge-label { color: var(--warning); }
.score-poor .score-gauge-label { color: var(--danger); }

/* === Markdown === */
.markdown p { margin: 0 0 0.5rem; }
.markdown p:last-child { margin-bottom: 0; }
.markdown ul, .markdown ol { padding-left: 1.25rem; margin-bottom: 0.5rem; }
.markdown code {
  font-family: 'JetBrains Mono', monospace;
  font-size: 0.85em;
  background: rgba(255, 255, 255, 0.08);
  padding: 0.1rem 0.3rem;
  border-radius: 4px;
}

/* === Landing === */
.hero {
  text-align: center;
  padding: 5rem 1rem 4rem;
}

.hero-badge {
  display: inline-flex;
  padding: 0.35rem 1rem;
  border-radius: 999px;
  font-size: 0.75rem;
  color: var(--neon);
  margin-bottom: 1.5rem;
}

.hero-title {
  font-size: 4rem;
  font-weight: 900;
  line-height: 0.95;
  margin-bottom: 1.5rem;
}

.gradient-text {
  background: linear-gradient(90deg, var(--neon), #5ad1ff);
  -webkit-background-clip: text;
  color: transparent;
}

.hero-tagline {
  font-size: 1.2rem;
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.hero-copy {
  max-width: 520px;
  margin: 0 auto 2.5rem;
  color: var(--text-muted);
  font-size: 0.9rem;
}

.hero .button-row {
  justify-content: center;
}

.feature-card {
  display: flex;
  gap: 1rem;
  padding: 1.5rem;
  cursor: pointer;
  transition: var(--transition-fast);
}

.feature-card:hover {
  transform: translateY(-2px);
}

.feature-card.glow {
  border-color: rgba(57, 255, 136, 0.35);
}

.feature-card.static {
  cursor: default;
}

.feature-card h3 {
  font-size: 1rem;
  margin-bottom: 0.25rem;
}

.feature-card p {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin: 3rem 0;
}

.chip {
  padding: 0.45rem 1rem;
  border-radius: 10px;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.section-label {
  text-align: center;
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.15em;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

/* === Scroll stack === */
.scroll-stack-viewport {
  height: calc(100vh - var(--navbar-height));
  overflow-y: auto;
  border-radius: var(--radius);
}

.scroll-stack {
  position: relative;
}

.stack-card-slot {
  height: 100vh;
  position: sticky;
  top: 0;
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding-top: 6rem;
}

.stack-card {
  position: relative;
  margin-top: -10vh;
  width: 100%;
  max-width: 640px;
  height: 420px;
  border-radius: 28px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 3rem;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  will-change: transform;
}

.stack-card-eyebrow {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--neon);
  margin-bottom: 1rem;
}

.stack-card h2 {
  font-size: 2.2rem;
  margin-bottom: 1rem;
}

.stack-card p {
  color: var(--text-secondary);
  max-width: 420px;
}

/* === History === */
.history-item {
  display: flex;
  align-items: center;
  gap: 1.25rem;
  padding: 1.25rem;
  margin-bottom: 0.75rem;
}

.history-item-body {
  flex: 1;
}

.history-meta {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.empty-state {
  text-align: center;
  padding: 3rem;
  color: var(--text-muted);
}

/* === Login === */
.auth-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.auth-card {
  width: 100%;
  max-width: 420px;
  padding: 2rem;
  background: var(--glass-strong);
}

.auth-card .btn-primary {
  width: 100%;
  justify-content: center;
}

.auth-footer {
  margin-top: 1.5rem;
  text-align: center;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.auth-footer a {
  color: var(--neon);
}

/* === Generated image === */
.generated-result img {
  width: 100%;
  border-radius: 12px;
  background: rgba(0, 0, 0, 0.3);
  object-fit: contain;
}

/* === Chat === */
.chat-fab {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 50;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  border: none;
  background: var(--neon);
  color: var(--ink);
  font-size: 1.4rem;
  cursor: pointer;
  box-shadow: var(--neon-glow);
}

.chat-panel {
  position: fixed;
  right: 1.5rem;
  bottom: 6rem;
  z-index: 50;
  width: 360px;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  background: var(--glass-strong);
  border: 1px solid var(--ink-border);
  border-radius: 18px;
}

.chat-resize-handle {
  height: 14px;
  cursor: ns-resize;
  display: flex;
  justify-content: center;
  align-items: center;
}

.chat-resize-handle::after {
  content: '';
  width: 36px;
  height: 4px;
  border-radius: 2px;
  background: var(--ink-border);
}

.chat-drag-overlay {
  position: fixed;
  inset: 0;
  z-index: 70;
  cursor: ns-resize;
}

.chat-header {
  padding: 0.5rem 1rem;
  border-bottom: 1px solid var(--ink-border);
  font-family: var(--font-heading);
  font-weight: 600;
  font-size: 0.9rem;
}

.chat-messages {
  flex: 1;
  overflow-y: auto;
  padding: 0.75rem 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.chat-empty {
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-muted);
  margin-top: 2rem;
}

.chat-bubble {
  max-width: 85%;
  padding: 0.5rem 0.75rem;
  border-radius: 12px;
  font-size: 0.875rem;
}

.chat-bubble.mine {
  align-self: flex-end;
  background: var(--neon);
  color: var(--ink);
}

.chat-bubble.theirs {
  align-self: flex-start;
  background: rgba(255, 255, 255, 0.08);
}

.chat-time {
  display: block;
  font-size: 0.65rem;
  opacity: 0.6;
  margin-top: 0.2rem;
}

.chat-input-row {
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem;
  border-top: 1px solid var(--ink-border);
}

.chat-input-row .form-field {
  flex: 1;
  margin: 0;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  top: calc(var(--navbar-height) + 1rem);
  right: 1rem;
  z-index: 80;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 320px;
}

.toast {
  padding: 0.85rem 1rem;
  border-radius: 12px;
  background: var(--glass-strong);
  border: 1px solid var(--ink-border);
  display: flex;
  gap: 0.5rem;
  align-items: flex-start;
}

.toast-body {
  flex: 1;
}

.toast-title {
  font-weight: 600;
  font-size: 0.875rem;
}

.toast-description {
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.toast.error {
  border-color: rgba(255, 77, 109, 0.5);
}

.toast.error .toast-title {
  color: var(--danger);
}

.toast.success .toast-title {
  color: var(--neon);
}

.startup-error {
  max-width: 560px;
  margin: 20vh auto;
  padding: 2rem;
  text-align: center;
}
"#;
