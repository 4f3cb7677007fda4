pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: 1px solid transparent;
  border-radius: var(--radius-full);
  font: inherit;
  font-weight: 600;
  letter-spacing: 0.01em;
  cursor: pointer;
  transition: filter var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  filter: brightness(1.08);
  text-decoration: none;
}

.btn:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  filter: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-accent {
  background-color: var(--accent);
  color: var(--neutral-900);
}

.btn-outline {
  background-color: transparent;
  color: inherit;
  border-color: currentColor;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.1rem;
}

.btn-icon {
  display: inline-grid;
  place-items: center;
  width: 40px;
  height: 40px;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
}

/* Cards */
.card {
  padding: var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface-raised);
  box-shadow: var(--shadow-sm);
}

/* Quote form */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.form-label {
  font-size: 0.9rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.form-label .required {
  color: var(--error);
  margin-left: var(--space-1);
}

.form-input,
.form-textarea,
.form-select {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus-visible,
.form-textarea:focus-visible,
.form-select:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 1px;
}

.form-input.invalid,
.form-textarea.invalid,
.form-select.invalid {
  border-color: var(--error);
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.form-status {
  margin-top: var(--space-3);
  font-weight: 500;
}

.form-status.error {
  color: var(--error);
}

.form-status.success {
  color: var(--success);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}

/* Table styles */
.table-container {
  width: 100%;
  overflow-x: auto;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

table {
  width: 100%;
  border-collapse: collapse;
}

thead tr {
  background-color: var(--primary);
  color: white;
}

th {
  padding: var(--space-3);
  text-align: left;
  font-weight: 500;
}

tbody tr {
  border-bottom: 1px solid var(--border);
}

tbody tr:nth-child(even) {
  background-color: var(--surface-muted);
}

td {
  padding: var(--space-3);
}

/* Accordion */
.accordion-item {
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-3);
  background-color: var(--surface-raised);
  overflow: hidden;
}

.accordion-header {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4);
  background: transparent;
  border: none;
  color: var(--text-primary);
  font: inherit;
  font-weight: 600;
  text-align: left;
  cursor: pointer;
}

.accordion-body {
  padding: 0 var(--space-4) var(--space-4);
  color: var(--text-secondary);
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
