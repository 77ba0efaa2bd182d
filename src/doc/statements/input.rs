/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is ` ? `. Blanks before the number are allowed.
Anything else besides a single integer, trailing blanks included,
prints `INVALID NUMBER` and asks again.

## Example
```text
10 INPUT A
20 PRINT A + 1
RUN
 ? twelve
INVALID NUMBER
 ? 12
13
```

*/
